use portable_atomic::{AtomicBool, Ordering};
use rivulet_utils_rs::core::{
  collections::queue::SpscQueue,
  sync::{ArcShared, SpinSyncMutex, WeakShared},
};
use spin::Once;

use crate::core::{
  demand_counter::DemandCounter,
  dropped_error::report_dropped_error,
  error_slot::ErrorSlot,
  fused_subscription::FusedSubscription,
  fusion_mode::FusionMode,
  stream_error::StreamError,
  subscriber::Subscriber,
  subscription::Subscription,
  subscription_handle::SubscriptionHandle,
  work_gate::WorkGate,
};

use super::{
  drain_core::{CursorProbe, DrainCore},
  element_intake::ElementIntake,
  upstream_state::UpstreamState,
};

/// The operator's subscriber: consumes outer elements, expands them and
/// delivers the results downstream under the granted demand.
///
/// Four independent call sites may enter concurrently (upstream delivery,
/// downstream demand, downstream cancellation, the fused pull), so every
/// piece of state is either atomic, installed once at handshake time, or
/// reached only through the work gate.
pub(super) struct FlattenIterableSubscriber<T, R, F, I>
where I: IntoIterator<Item = Result<R, StreamError>>
{
  downstream: ArcShared<dyn Subscriber<R>>,
  self_weak:  WeakShared<Self>,
  prefetch:   usize,
  limit:      usize,
  requested:  DemandCounter,
  wip:        WorkGate,
  errors:     ErrorSlot,
  done:       AtomicBool,
  cancelled:  AtomicBool,
  upstream:   Once<UpstreamState<T>>,
  core:       SpinSyncMutex<DrainCore<F, I>>,
}

impl<T, R, F, I> FlattenIterableSubscriber<T, R, F, I>
where
  T: Send + 'static,
  R: Send + 'static,
  F: FnMut(T) -> Result<I, StreamError> + Send + 'static,
  I: IntoIterator<Item = Result<R, StreamError>> + 'static,
  I::IntoIter: Send + 'static,
{
  /// Creates the subscriber as a shared handle holding a weak reference to
  /// itself, so the handshake can hand it downstream as a subscription.
  pub(super) fn shared(downstream: ArcShared<dyn Subscriber<R>>, expand: F, prefetch: usize) -> ArcShared<Self> {
    ArcShared::new_cyclic(|weak| Self {
      downstream,
      self_weak: weak.clone(),
      prefetch,
      limit: prefetch - (prefetch >> 2),
      requested: DemandCounter::new(),
      wip: WorkGate::new(),
      errors: ErrorSlot::new(),
      done: AtomicBool::new(false),
      cancelled: AtomicBool::new(false),
      upstream: Once::new(),
      core: SpinSyncMutex::new(DrainCore::new(expand)),
    })
  }

  fn handoff(&self) {
    if let Some(this) = self.self_weak.upgrade() {
      let fused = this.into_dyn(|value| value as &dyn FusedSubscription<R>);
      self.downstream.on_subscribe(SubscriptionHandle::Fused(fused));
    }
  }

  /// Records the failure without re-triggering the drain; callers inside the
  /// drain loop surface it through the next termination check.
  fn fail(&self, error: StreamError) {
    match self.errors.record(error) {
      | Ok(()) => self.done.store(true, Ordering::Release),
      | Err(refused) => report_dropped_error(&refused),
    }
  }

  fn drain(&self) {
    if self.wip.enter() {
      self.drain_loop();
    }
  }

  /// The drain loop: pulls queued outer elements, expands them, and emits
  /// results bounded by the outstanding demand.
  ///
  /// Runs only on the call site that won the work gate. Exiting through a
  /// termination check leaves the gate occupied, which permanently suppresses
  /// later entries.
  fn drain_loop(&self) {
    let state = self.upstream.get();
    let replenish = state.is_some_and(|s| !matches!(s.mode, FusionMode::Sync));
    let mut missed = 1_u32;
    let mut core = self.core.lock();
    loop {
      if core.cursor.is_none() {
        // Read the terminal flag before probing the queue so "done and
        // empty" cannot miss an element enqueued in between.
        let done = self.done.load(Ordering::Acquire);
        let next = match state {
          | Some(s) => match s.intake.poll() {
            | Ok(value) => value,
            | Err(error) => {
              self.fail(error);
              if self.check_terminated(true, true, &mut core, state) {
                return;
              }
              continue;
            },
          },
          | None => None,
        };
        let empty = next.is_none();
        if self.check_terminated(done, empty, &mut core, state) {
          return;
        }
        if let Some(outer) = next {
          match (core.expand)(outer) {
            | Ok(sub) => {
              core.cursor = Some(sub.into_iter().peekable());
              match core.probe_cursor() {
                | CursorProbe::More => {},
                | CursorProbe::Exhausted => {
                  core.cursor = None;
                  self.consumed_one(replenish, &mut core, state);
                  continue;
                },
                | CursorProbe::Failed(error) => {
                  core.cursor = None;
                  self.fail(error);
                  continue;
                },
              }
            },
            | Err(error) => {
              self.fail(error);
              continue;
            },
          }
        }
      }

      if core.cursor.is_some() {
        let requested = self.requested.raw();
        let mut emitted = 0_u64;
        while emitted != requested {
          if self.check_terminated(self.done.load(Ordering::Acquire), false, &mut core, state) {
            return;
          }
          let item = match core.cursor.as_mut() {
            | Some(cursor) => cursor.next(),
            | None => None,
          };
          match item {
            | Some(Ok(element)) => {
              self.downstream.on_next(element);
              if self.check_terminated(self.done.load(Ordering::Acquire), false, &mut core, state) {
                return;
              }
              emitted += 1;
              match core.probe_cursor() {
                | CursorProbe::More => {},
                | CursorProbe::Exhausted => {
                  core.cursor = None;
                  self.consumed_one(replenish, &mut core, state);
                  break;
                },
                | CursorProbe::Failed(error) => self.fail(error),
              }
            },
            | Some(Err(error)) => self.fail(error),
            | None => {
              core.cursor = None;
              self.consumed_one(replenish, &mut core, state);
              break;
            },
          }
        }

        if emitted == requested {
          let done = self.done.load(Ordering::Acquire);
          let empty = state.is_none_or(|s| s.intake.is_empty()) && core.cursor.is_none();
          if self.check_terminated(done, empty, &mut core, state) {
            return;
          }
        }
        if emitted != 0 {
          self.requested.produced(emitted);
        }
        if core.cursor.is_none() {
          continue;
        }
      }

      missed = self.wip.leave(missed);
      if missed == 0 {
        return;
      }
    }
  }

  /// Terminal-state check run before emitting and after every delivery.
  ///
  /// Returns `true` when the caller must stop: the stream was cancelled, or
  /// upstream is done and either a failure is pending or everything was
  /// delivered.
  fn check_terminated(
    &self,
    done: bool,
    empty: bool,
    core: &mut DrainCore<F, I>,
    state: Option<&UpstreamState<T>>,
  ) -> bool {
    if self.cancelled.load(Ordering::Acquire) {
      core.cursor = None;
      if let Some(s) = state {
        s.intake.clear();
      }
      return true;
    }
    if done {
      if let Some(error) = self.errors.take() {
        core.cursor = None;
        if let Some(s) = state {
          s.intake.clear();
        }
        self.downstream.on_error(error);
        return true;
      }
      if empty {
        self.errors.seal();
        self.downstream.on_complete();
        return true;
      }
    }
    false
  }

  /// Counts one consumed outer element and replenishes upstream demand once
  /// the batch threshold is reached. Suppressed entirely under sync fusion.
  fn consumed_one(&self, replenish: bool, core: &mut DrainCore<F, I>, state: Option<&UpstreamState<T>>) {
    if !replenish {
      return;
    }
    let consumed = core.consumed + 1;
    if consumed == self.limit {
      core.consumed = 0;
      if let Some(s) = state {
        s.subscription.request(consumed as u64);
      }
    } else {
      core.consumed = consumed;
    }
  }

  fn clear_state(&self) {
    self.core.lock().cursor = None;
    if let Some(state) = self.upstream.get() {
      state.intake.clear();
    }
  }
}

impl<T, R, F, I> Subscriber<T> for FlattenIterableSubscriber<T, R, F, I>
where
  T: Send + 'static,
  R: Send + 'static,
  F: FnMut(T) -> Result<I, StreamError> + Send + 'static,
  I: IntoIterator<Item = Result<R, StreamError>> + 'static,
  I::IntoIter: Send + 'static,
{
  fn on_subscribe(&self, subscription: SubscriptionHandle<T>) {
    if self.upstream.is_completed() {
      subscription.cancel();
      report_dropped_error(&StreamError::AlreadySubscribed);
      return;
    }

    let state = match subscription {
      | SubscriptionHandle::Fused(fused) => match fused.request_fusion(FusionMode::Async) {
        | FusionMode::Sync => UpstreamState {
          subscription: SubscriptionHandle::Fused(fused.clone()),
          intake:       ElementIntake::Fused(fused),
          mode:         FusionMode::Sync,
        },
        | FusionMode::Async => UpstreamState {
          subscription: SubscriptionHandle::Fused(fused.clone()),
          intake:       ElementIntake::Fused(fused),
          mode:         FusionMode::Async,
        },
        | FusionMode::None => UpstreamState {
          subscription: SubscriptionHandle::Fused(fused),
          intake:       ElementIntake::Owned(SpscQueue::bounded(self.prefetch)),
          mode:         FusionMode::None,
        },
      },
      | plain @ SubscriptionHandle::Plain(_) => UpstreamState {
        subscription: plain,
        intake:       ElementIntake::Owned(SpscQueue::bounded(self.prefetch)),
        mode:         FusionMode::None,
      },
    };
    let redundant = state.subscription.clone();
    let mode = state.mode;

    let mut installed = false;
    self.upstream.call_once(|| {
      installed = true;
      state
    });
    if !installed {
      redundant.cancel();
      report_dropped_error(&StreamError::AlreadySubscribed);
      return;
    }

    match mode {
      | FusionMode::Sync => {
        // A sync-fused upstream is fully materialized: mark it done up
        // front and never issue demand.
        self.done.store(true, Ordering::Release);
        self.handoff();
      },
      | FusionMode::Async | FusionMode::None => {
        self.handoff();
        if let Some(s) = self.upstream.get() {
          s.subscription.request(self.prefetch as u64);
        }
      },
    }
  }

  fn on_next(&self, element: T) {
    let Some(state) = self.upstream.get() else {
      report_dropped_error(&StreamError::upstream("element delivered before subscription"));
      return;
    };
    match &state.intake {
      | ElementIntake::Owned(queue) => {
        if queue.offer(element).is_err() {
          self.on_error(StreamError::BackpressureViolated);
          return;
        }
      },
      // A fused upstream buffers internally; the payload is only a wake-up.
      | ElementIntake::Fused(_) => drop(element),
    }
    self.drain();
  }

  fn on_error(&self, error: StreamError) {
    match self.errors.record(error) {
      | Ok(()) => {
        self.done.store(true, Ordering::Release);
        self.drain();
      },
      | Err(refused) => report_dropped_error(&refused),
    }
  }

  fn on_complete(&self) {
    self.done.store(true, Ordering::Release);
    self.drain();
  }

  fn on_pushed(&self) {
    self.drain();
  }
}

impl<T, R, F, I> Subscription for FlattenIterableSubscriber<T, R, F, I>
where
  T: Send + 'static,
  R: Send + 'static,
  F: FnMut(T) -> Result<I, StreamError> + Send + 'static,
  I: IntoIterator<Item = Result<R, StreamError>> + 'static,
  I::IntoIter: Send + 'static,
{
  fn request(&self, n: u64) {
    if n == 0 {
      report_dropped_error(&StreamError::InvalidDemand);
      return;
    }
    self.requested.add(n);
    self.drain();
  }

  fn cancel(&self) {
    if self.cancelled.swap(true, Ordering::AcqRel) {
      return;
    }
    self.errors.seal();
    // Winning the gate here means no drain is in flight; clear immediately.
    // Otherwise the running drain observes the flag at its next termination
    // check and performs the clearing. Either way the gate stays occupied.
    if self.wip.enter() {
      self.clear_state();
    }
  }
}

impl<T, R, F, I> FusedSubscription<R> for FlattenIterableSubscriber<T, R, F, I>
where
  T: Send + 'static,
  R: Send + 'static,
  F: FnMut(T) -> Result<I, StreamError> + Send + 'static,
  I: IntoIterator<Item = Result<R, StreamError>> + 'static,
  I::IntoIter: Send + 'static,
{
  fn request_fusion(&self, requested: FusionMode) -> FusionMode {
    let sync_upstream = self.upstream.get().is_some_and(|state| matches!(state.mode, FusionMode::Sync));
    if sync_upstream && requested.is_fused() {
      FusionMode::Sync
    } else {
      FusionMode::None
    }
  }

  fn poll(&self) -> Result<Option<R>, StreamError> {
    let Some(state) = self.upstream.get() else {
      return Ok(None);
    };
    let mut core = self.core.lock();
    loop {
      if let Some(cursor) = core.cursor.as_mut() {
        match cursor.next() {
          | Some(Ok(element)) => {
            if cursor.peek().is_none() {
              core.cursor = None;
            }
            return Ok(Some(element));
          },
          | Some(Err(error)) => {
            core.cursor = None;
            return Err(error);
          },
          | None => core.cursor = None,
        }
      } else {
        match state.intake.poll()? {
          | Some(outer) => {
            let sub = (core.expand)(outer)?;
            let mut cursor = sub.into_iter().peekable();
            // Empty sub-sequences are skipped rather than surfaced.
            if cursor.peek().is_some() {
              core.cursor = Some(cursor);
            }
          },
          | None => return Ok(None),
        }
      }
    }
  }

  fn is_empty(&self) -> bool {
    let Some(state) = self.upstream.get() else {
      return true;
    };
    let mut core = self.core.lock();
    match core.cursor.as_mut() {
      | Some(cursor) => cursor.peek().is_none(),
      | None => state.intake.is_empty(),
    }
  }

  fn clear(&self) {
    self.clear_state();
  }
}
