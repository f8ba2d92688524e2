use winit::event::WindowEvent;

/// Control directive returned by [`App`] callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Contract between [`FrameLoop`](crate::FrameLoop) and application code.
///
/// The loop consumes `RedrawRequested` itself — that is where scheduled
/// frame callbacks run — and forwards every other window event here. It
/// never exits on its own: return [`LoopControl::Exit`], typically for
/// [`WindowEvent::CloseRequested`], to quit.
pub trait App {
    fn on_window_event(&mut self, event: &WindowEvent) -> LoopControl;
}
