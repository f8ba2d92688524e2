//! winit host binding for framegate.
//!
//! This crate owns the platform pieces: a [`RedrawScheduler`] whose ticks are
//! `RedrawRequested` events, and a [`FrameLoop`] that pumps a single window.
//! `framegate` itself stays windowing-free; binaries depend on this crate to
//! run throttles against a real compositor clock.
//!
//! Typical wiring:
//!
//! ```rust,ignore
//! use framegate::FrameThrottle;
//! use framegate_winit::{App, FrameLoop, LoopConfig, LoopControl, RedrawScheduler, init_logging};
//! use winit::event::WindowEvent;
//!
//! struct Tracker {
//!     throttle: FrameThrottle<RedrawScheduler, (f64, f64)>,
//! }
//!
//! impl App for Tracker {
//!     fn on_window_event(&mut self, event: &WindowEvent) -> LoopControl {
//!         match event {
//!             WindowEvent::CursorMoved { position, .. } => {
//!                 self.throttle.call((position.x, position.y));
//!                 LoopControl::Continue
//!             }
//!             WindowEvent::CloseRequested => LoopControl::Exit,
//!             _ => LoopControl::Continue,
//!         }
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(None);
//!     let scheduler = RedrawScheduler::new();
//!     let throttle = FrameThrottle::new(scheduler.clone(), |(x, y)| {
//!         log::info!("cursor at ({x:.0}, {y:.0})");
//!     });
//!     FrameLoop::run(LoopConfig::default(), scheduler, Tracker { throttle })
//! }
//! ```

pub mod app;
pub mod logging;
pub mod runtime;
pub mod scheduler;

pub use app::{App, LoopControl};
pub use logging::init_logging;
pub use runtime::{FrameLoop, LoopConfig};
pub use scheduler::RedrawScheduler;
