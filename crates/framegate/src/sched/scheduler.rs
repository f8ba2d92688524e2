use std::fmt;
use std::time::Instant;

/// Timing snapshot handed to every frame callback.
///
/// Shared by all callbacks run on the same tick. The throttle ignores it;
/// other scheduler users can read it for pacing or diagnostics.
#[derive(Debug, Copy, Clone)]
pub struct FrameTick {
    /// Monotonic timestamp taken when the tick began.
    pub now: Instant,

    /// Monotonic tick counter, starting at zero.
    pub frame_index: u64,
}

/// A one-shot callback scheduled for the next frame tick.
pub type FrameCallback = Box<dyn FnOnce(FrameTick)>;

/// Identifier for a scheduled-but-not-yet-fired frame callback.
///
/// Minted by scheduler implementations; opaque to everyone else. Ids are
/// never reused within one scheduler, so a stale id held across a fire
/// cannot cancel a later request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// First id handed out by a scheduler.
    pub const fn first() -> Self {
        Self(0)
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability for scheduling work onto the next frame tick.
///
/// Implementations are cheap cloneable handles with interior state, shared
/// between the code scheduling work and the loop driving it. Everything runs
/// on one thread; implementations are not required to be `Send`.
///
/// # Contract
///
/// - `schedule_frame` defers: the callback must never run from inside the
///   call, even if a tick is due. Execution happens on a later turn of the
///   driving loop.
/// - Callbacks run in scheduling order, each at most once.
/// - A callback scheduled from inside a running frame callback runs on the
///   *next* tick, never the current one.
/// - `cancel_frame` with an unknown or already-fired id is a no-op, so
///   callers may hold an id across a fire without bookkeeping.
/// - Request handles are never reused within one scheduler, so comparing a
///   held handle with a later one is meaningful.
pub trait FrameScheduler {
    /// Opaque handle identifying one scheduled callback.
    type Request: Copy + PartialEq + fmt::Debug + 'static;

    /// Registers `callback` to run on the next frame tick.
    fn schedule_frame(&self, callback: FrameCallback) -> Self::Request;

    /// Cancels a previously scheduled callback.
    fn cancel_frame(&self, request: Self::Request);
}
