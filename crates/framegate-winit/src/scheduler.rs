use std::cell::RefCell;
use std::rc::Rc;

use winit::window::Window;

use framegate::sched::CallbackQueue;
use framegate::{FrameCallback, FrameScheduler, RequestId};

/// Frame scheduler backed by winit's redraw cycle.
///
/// `schedule_frame` queues the callback and asks the bound window for a
/// redraw (the host coalesces repeated requests); whoever owns the event
/// loop calls [`tick`](Self::tick) once per `RedrawRequested` to run the due
/// batch. [`FrameLoop`](crate::FrameLoop) does both wiring steps for you;
/// programs with their own `ApplicationHandler` call
/// [`bind_window`](Self::bind_window) and `tick` themselves.
///
/// Callbacks scheduled before a window exists simply queue; binding the
/// window flushes them by requesting one redraw. Unbound schedulers also
/// make the queue discipline testable without a display.
///
/// Handles are cheap clones sharing one queue.
#[derive(Clone)]
pub struct RedrawScheduler {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    queue: CallbackQueue,
    window: Option<Rc<Window>>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                queue: CallbackQueue::new(),
                window: None,
            })),
        }
    }

    /// Number of callbacks waiting for the next redraw.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Attaches the window whose redraw cycle drives this scheduler,
    /// requesting a redraw if callbacks are already waiting.
    pub fn bind_window(&self, window: Rc<Window>) {
        let mut inner = self.inner.borrow_mut();
        if !inner.queue.is_empty() {
            window.request_redraw();
        }
        inner.window = Some(window);
    }

    /// Runs the batch due for the redraw being processed, in scheduling
    /// order, all callbacks seeing the same
    /// [`FrameTick`](framegate::FrameTick).
    ///
    /// The queue is drained first, so a callback scheduled from inside a
    /// running callback lands on the next redraw (its `request_redraw` has
    /// already re-armed the host).
    ///
    /// Returns how many callbacks ran.
    pub fn tick(&self) -> usize {
        let (due, tick) = self.inner.borrow_mut().queue.drain_for_tick();

        let count = due.len();
        for (_request, callback) in due {
            callback(tick);
        }
        count
    }
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RedrawScheduler {
    type Request = RequestId;

    fn schedule_frame(&self, callback: FrameCallback) -> RequestId {
        let mut inner = self.inner.borrow_mut();
        let request = inner.queue.push(callback);
        if let Some(window) = &inner.window {
            window.request_redraw();
        }
        request
    }

    fn cancel_frame(&self, request: RequestId) {
        self.inner.borrow_mut().queue.remove(request);
    }
}
