//! Frame-tick call throttling.
//!
//! [`FrameThrottle`] wraps a callback so that repeated calls collapse to at
//! most one invocation per frame tick — useful for rate-limiting event
//! streams (pointer moves, resize storms) that would otherwise thrash
//! whatever the callback drives. Scheduling goes through the
//! [`FrameScheduler`] capability, so the core never touches a windowing
//! stack: tests drive a [`ManualScheduler`], real applications plug in a
//! host binding such as `framegate-winit`'s redraw scheduler.
//!
//! One contract worth reading twice: a burst keeps the **first** call's
//! arguments, not the last — see [`FrameThrottle`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`sched`] | `FrameScheduler`, `ManualScheduler`, `FrameCallback`, `FrameTick`, `RequestId` |
//! | [`throttle`] | `FrameThrottle` |
//!
//! # Quick start
//!
//! ```rust
//! use framegate::{FrameThrottle, ManualScheduler};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let scheduler = ManualScheduler::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let throttle = FrameThrottle::new(scheduler.clone(), move |v: u32| {
//!     sink.borrow_mut().push(v);
//! });
//!
//! throttle.call(1);
//! throttle.call(2); // dropped: a frame is already scheduled
//! assert!(seen.borrow().is_empty()); // nothing runs until the tick
//!
//! scheduler.tick();
//! assert_eq!(*seen.borrow(), vec![1]); // the first call's args win
//!
//! throttle.call(3);
//! throttle.cancel(); // suppresses the scheduled invocation
//! scheduler.tick();
//! assert_eq!(*seen.borrow(), vec![1]);
//! ```

pub mod sched;
pub mod throttle;

pub use sched::{FrameCallback, FrameScheduler, FrameTick, ManualScheduler, RequestId};
pub use throttle::FrameThrottle;
