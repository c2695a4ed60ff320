extern crate std;

use std::{thread, vec::Vec};

use portable_atomic::{AtomicU32, Ordering};

use crate::core::WorkGate;

#[test]
fn only_the_first_entry_wins_the_gate() {
  let gate = WorkGate::new();
  assert!(gate.enter());
  assert!(!gate.enter());
  assert!(!gate.enter());
  assert_eq!(gate.pending(), 3);
}

#[test]
fn leave_reports_entries_missed_during_the_run() {
  let gate = WorkGate::new();
  assert!(gate.enter());
  assert!(!gate.enter());
  let remaining = gate.leave(1);
  assert_eq!(remaining, 1);
  assert_eq!(gate.leave(remaining), 0);
  assert!(gate.enter());
}

#[test]
fn concurrent_entries_elect_exactly_one_owner_per_burst() {
  static BODY_RUNS: AtomicU32 = AtomicU32::new(0);

  let gate = crate::core::WorkGate::new();
  let gate = &gate;
  thread::scope(|scope| {
    let handles: Vec<_> = (0..8)
      .map(|_| {
        scope.spawn(move || {
          if gate.enter() {
            // Owner drains: retire observed entries until none remain.
            BODY_RUNS.fetch_add(1, Ordering::SeqCst);
            let mut missed = 1;
            loop {
              missed = gate.leave(missed);
              if missed == 0 {
                break;
              }
              BODY_RUNS.fetch_add(1, Ordering::SeqCst);
            }
          }
        })
      })
      .collect();
    for handle in handles {
      handle.join().expect("gate thread panicked");
    }
  });

  assert_eq!(gate.pending(), 0);
  assert!(BODY_RUNS.load(Ordering::SeqCst) >= 1);
}
