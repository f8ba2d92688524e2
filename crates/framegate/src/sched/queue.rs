use std::mem;
use std::time::Instant;

use super::scheduler::{FrameCallback, FrameTick, RequestId};

/// Scheduling-order callback queue with the drain-before-run discipline.
///
/// Building block for [`FrameScheduler`](super::FrameScheduler)
/// implementations: it mints request ids, holds callbacks until the next
/// tick, and counts frames. Implementations wrap it in whatever sharing and
/// host signalling they need.
pub struct CallbackQueue {
    next_request: RequestId,
    entries: Vec<(RequestId, FrameCallback)>,
    frame_index: u64,
}

impl CallbackQueue {
    pub fn new() -> Self {
        Self {
            next_request: RequestId::first(),
            entries: Vec::new(),
            frame_index: 0,
        }
    }

    /// Number of callbacks waiting for the next tick.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queues `callback` under a fresh request id.
    pub fn push(&mut self, callback: FrameCallback) -> RequestId {
        let request = self.next_request;
        self.next_request = request.next();
        self.entries.push((request, callback));
        request
    }

    /// Removes a queued callback. Unknown or already-drained ids are
    /// ignored, which is what makes stale cancels safe.
    pub fn remove(&mut self, request: RequestId) {
        self.entries.retain(|(id, _)| *id != request);
    }

    /// Takes every queued callback and mints the tick they should observe,
    /// advancing the frame counter.
    ///
    /// The queue is left empty, so callbacks pushed while the drained batch
    /// runs land in the next batch — run the batch only after releasing any
    /// borrow of the queue.
    pub fn drain_for_tick(&mut self) -> (Vec<(RequestId, FrameCallback)>, FrameTick) {
        let due = mem::take(&mut self.entries);
        let tick = FrameTick {
            now: Instant::now(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        (due, tick)
    }
}

impl Default for CallbackQueue {
    fn default() -> Self {
        Self::new()
    }
}
