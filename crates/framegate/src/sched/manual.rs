use std::cell::RefCell;
use std::rc::Rc;

use super::queue::CallbackQueue;
use super::scheduler::{FrameCallback, FrameScheduler, RequestId};

/// Tick-driven scheduler with no host behind it.
///
/// Callbacks queue up until [`tick`](Self::tick) is called, which makes
/// frame boundaries explicit — the property the throttle tests rely on.
/// Also usable as-is wherever an existing loop already knows when a "frame"
/// happens.
///
/// Handles are cheap clones sharing one queue.
#[derive(Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<CallbackQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(CallbackQueue::new())),
        }
    }

    /// Number of callbacks waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Runs one frame tick: every callback scheduled before this call fires
    /// once, in scheduling order, all seeing the same
    /// [`FrameTick`](super::FrameTick).
    ///
    /// The queue is drained before anything runs, so a callback scheduled
    /// from inside a running callback lands on the next tick. Calling `tick`
    /// from inside a frame callback is not supported.
    ///
    /// Returns how many callbacks ran.
    pub fn tick(&self) -> usize {
        let (due, tick) = self.inner.borrow_mut().drain_for_tick();

        let count = due.len();
        for (_request, callback) in due {
            callback(tick);
        }
        count
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    type Request = RequestId;

    fn schedule_frame(&self, callback: FrameCallback) -> RequestId {
        self.inner.borrow_mut().push(callback)
    }

    fn cancel_frame(&self, request: RequestId) {
        self.inner.borrow_mut().remove(request);
    }
}
