use std::cell::RefCell;
use std::rc::Rc;

use crate::sched::FrameScheduler;

/// Collapses bursts of calls into at most one callback invocation per frame
/// tick.
///
/// The first [`call`](Self::call) after an idle period schedules the wrapped
/// callback for the next tick and captures that call's arguments. Every
/// further call before the tick fires is dropped outright, **arguments
/// included** — the invocation runs with the args of the call that did the
/// scheduling. First-call-wins is the contract, not an accident: unlike most
/// throttle helpers, later calls never refresh the captured args. Callers
/// that want latest-value semantics should read current state from inside
/// the callback instead.
///
/// After the callback runs (or after [`cancel`](Self::cancel)) the wrapper
/// is idle again and the next `call` schedules a fresh tick; instances are
/// reusable indefinitely. Cancelling and re-calling from inside the running
/// callback also works: the fresh request starts a new cycle whose first
/// caller wins.
///
/// Clones share one throttle — state and callback alike — the way a single
/// function value is shared by reference. Dropping handles does not cancel:
/// a scheduled invocation still fires even if every handle is gone. `cancel`
/// is the only suppression path.
///
/// Single-threaded by design, like the schedulers it drives.
pub struct FrameThrottle<S, A>
where
    S: FrameScheduler,
{
    scheduler: S,
    shared: Rc<Shared<A, S::Request>>,
}

struct Shared<A, R> {
    /// Pending-request marker plus the captured call.
    state: RefCell<State<A, R>>,

    /// Wrapped callback, in its own cell so the fire path can invoke it
    /// without holding the state borrow — reentrant calls from inside the
    /// callback must be ordinary no-ops, not borrow panics.
    callback: RefCell<Box<dyn FnMut(A)>>,
}

struct State<A, R> {
    request: Option<R>,
    captured: Option<A>,
}

impl<S, A> FrameThrottle<S, A>
where
    S: FrameScheduler,
    A: 'static,
{
    /// Wraps `callback`. Nothing is scheduled until the first `call`.
    pub fn new(scheduler: S, callback: impl FnMut(A) + 'static) -> Self {
        Self {
            scheduler,
            shared: Rc::new(Shared {
                state: RefCell::new(State {
                    request: None,
                    captured: None,
                }),
                callback: RefCell::new(Box::new(callback)),
            }),
        }
    }

    /// The throttled call. Schedules the callback for the next frame tick
    /// unless one is already outstanding, in which case `args` is dropped.
    ///
    /// Returns immediately in both cases; the callback only ever runs from
    /// the scheduler's tick.
    pub fn call(&self, args: A) {
        {
            let mut state = self.shared.state.borrow_mut();
            if state.request.is_some() {
                // A frame is already outstanding; this burst keeps the args
                // captured by the call that scheduled it.
                log::trace!("throttled call dropped, frame already scheduled");
                return;
            }
            state.captured = Some(args);
        }

        let shared = Rc::clone(&self.shared);
        let request = self
            .scheduler
            .schedule_frame(Box::new(move |_tick| fire(&shared)));
        self.shared.state.borrow_mut().request = Some(request);
        log::trace!("throttled call scheduled as {request:?}");
    }

    /// Cancels the scheduled invocation, if any. Idempotent; a no-op while
    /// idle.
    pub fn cancel(&self) {
        let request = {
            let mut state = self.shared.state.borrow_mut();
            state.captured = None;
            state.request.take()
        };

        if let Some(request) = request {
            self.scheduler.cancel_frame(request);
            log::trace!("throttled call {request:?} cancelled");
        }
    }

    /// True while a scheduled invocation is outstanding: from the `call`
    /// that scheduled it until the callback returns or `cancel` runs.
    pub fn is_scheduled(&self) -> bool {
        self.shared.state.borrow().request.is_some()
    }
}

impl<S, A> Clone for FrameThrottle<S, A>
where
    S: FrameScheduler + Clone,
{
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            shared: Rc::clone(&self.shared),
        }
    }
}

/// Runs one scheduled invocation.
///
/// Order matters: the args are taken first, the callback runs while the
/// request marker is still set (so a call made from inside the callback sees
/// a pending frame and is dropped), and only then does the marker clear,
/// and only if it is still this invocation's own: a fresh request installed
/// by a reentrant cancel-then-call stays pending until its own fire. A panic
/// in the callback leaves the marker set, exactly like the underlying
/// platform pattern where the clear statement never runs.
fn fire<A, R>(shared: &Shared<A, R>)
where
    R: Copy + PartialEq,
{
    let (args, request) = {
        let mut state = shared.state.borrow_mut();
        (state.captured.take(), state.request)
    };

    // A cancel that raced this tick — issued by a sibling callback in the
    // same batch, after the queue was drained — leaves nothing captured.
    let Some(args) = args else { return };

    {
        let mut callback = shared.callback.borrow_mut();
        (*callback)(args);
    }

    // Ids are never reused, so equality means the marker is still ours.
    let mut state = shared.state.borrow_mut();
    if state.request == request {
        state.request = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::ManualScheduler;

    /// Throttle wired to a recorder collecting every delivered argument.
    fn recorded(
        sched: &ManualScheduler,
    ) -> (FrameThrottle<ManualScheduler, u32>, Rc<RefCell<Vec<u32>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let throttle = FrameThrottle::new(sched.clone(), move |v: u32| sink.borrow_mut().push(v));
        (throttle, calls)
    }

    // ── call ──────────────────────────────────────────────────────────────

    #[test]
    fn burst_collapses_to_one_invocation_with_first_args() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);

        throttle.call(1);
        throttle.call(2);
        throttle.call(3);

        // Nothing runs until the tick.
        assert!(calls.borrow().is_empty());

        sched.tick();
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn fire_returns_to_idle_and_the_next_call_schedules_again() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);

        throttle.call(1);
        sched.tick();
        throttle.call(2);
        sched.tick();

        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn is_scheduled_tracks_the_state_machine() {
        let sched = ManualScheduler::new();
        let (throttle, _calls) = recorded(&sched);

        assert!(!throttle.is_scheduled());

        throttle.call(1);
        assert!(throttle.is_scheduled());

        sched.tick();
        assert!(!throttle.is_scheduled());

        throttle.call(2);
        throttle.cancel();
        assert!(!throttle.is_scheduled());
    }

    // ── cancel ────────────────────────────────────────────────────────────

    #[test]
    fn cancel_suppresses_the_scheduled_invocation() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);

        throttle.call(1);
        throttle.cancel();
        sched.tick();

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn cancel_while_idle_is_a_noop() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);

        throttle.cancel();
        sched.tick();

        assert!(calls.borrow().is_empty());
        assert!(!throttle.is_scheduled());
    }

    #[test]
    fn double_cancel_cancels_once_and_leaves_the_scheduler_usable() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);

        throttle.call(1);
        throttle.cancel();
        throttle.cancel();

        throttle.call(2);
        sched.tick();

        assert_eq!(*calls.borrow(), vec![2]);
    }

    // ── sharing & reentrancy ──────────────────────────────────────────────

    #[test]
    fn clones_share_one_pending_slot() {
        let sched = ManualScheduler::new();
        let (throttle, calls) = recorded(&sched);
        let alias = throttle.clone();

        throttle.call(1);
        alias.call(2); // same instance: dropped
        assert!(alias.is_scheduled());

        sched.tick();
        assert_eq!(*calls.borrow(), vec![1]);

        alias.call(3);
        sched.tick();
        assert_eq!(*calls.borrow(), vec![1, 3]);
    }

    #[test]
    fn call_from_inside_the_callback_is_dropped() {
        let sched = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<FrameThrottle<ManualScheduler, u32>>>> =
            Rc::new(RefCell::new(None));

        let sink = Rc::clone(&calls);
        let reenter = Rc::clone(&slot);
        let throttle = FrameThrottle::new(sched.clone(), move |v: u32| {
            sink.borrow_mut().push(v);
            // Mid-fire the pending marker is still set, so this is dropped.
            if let Some(t) = reenter.borrow().as_ref() {
                t.call(99);
            }
        });
        *slot.borrow_mut() = Some(throttle.clone());

        throttle.call(1);
        sched.tick();

        assert_eq!(*calls.borrow(), vec![1]);
        assert_eq!(sched.pending(), 0);
        assert!(!throttle.is_scheduled());

        // Back to idle afterwards: a fresh call schedules normally.
        throttle.call(5);
        sched.tick();
        assert_eq!(*calls.borrow(), vec![1, 5]);
    }

    #[test]
    fn cancel_then_call_from_inside_the_callback_starts_a_fresh_cycle() {
        let sched = ManualScheduler::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<FrameThrottle<ManualScheduler, u32>>>> =
            Rc::new(RefCell::new(None));

        let sink = Rc::clone(&calls);
        let reenter = Rc::clone(&slot);
        let throttle = FrameThrottle::new(sched.clone(), move |v: u32| {
            sink.borrow_mut().push(v);
            if v == 1 {
                if let Some(t) = reenter.borrow().as_ref() {
                    t.cancel();
                    t.call(2); // idle again mid-fire: schedules a fresh frame
                }
            }
        });
        *slot.borrow_mut() = Some(throttle.clone());

        throttle.call(1);
        sched.tick();

        // The fresh request survives the outer fire's cleanup.
        assert!(throttle.is_scheduled());
        assert_eq!(sched.pending(), 1);

        // First-call-wins holds for the new cycle: this one is dropped.
        throttle.call(3);

        sched.tick();
        assert_eq!(*calls.borrow(), vec![1, 2]);
        assert!(!throttle.is_scheduled());
    }

    #[test]
    fn cancel_from_a_sibling_callback_in_the_same_tick_suppresses_the_victim() {
        let sched = ManualScheduler::new();
        let (victim, victim_calls) = recorded(&sched);

        let cancels = victim.clone();
        let canceller = FrameThrottle::new(sched.clone(), move |_: u32| cancels.cancel());

        canceller.call(0); // runs first in the batch
        victim.call(1);
        sched.tick();

        assert!(victim_calls.borrow().is_empty());
        assert!(!victim.is_scheduled());

        // The victim is idle, not wedged: it schedules again.
        victim.call(7);
        sched.tick();
        assert_eq!(*victim_calls.borrow(), vec![7]);
    }
}
