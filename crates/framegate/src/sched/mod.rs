//! Frame scheduling capability.
//!
//! [`FrameScheduler`] is the seam between throttled work and whatever drives
//! frames: a real host binding (see `framegate-winit`) or the in-process
//! [`ManualScheduler`] for tests and headless code. The throttle never talks
//! to a host directly — it only schedules and cancels through this trait.

mod manual;
mod queue;
mod scheduler;

pub use manual::ManualScheduler;
pub use queue::CallbackQueue;
pub use scheduler::{FrameCallback, FrameScheduler, FrameTick, RequestId};
