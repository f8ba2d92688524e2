use framegate::FrameThrottle;
use framegate_winit::{init_logging, App, FrameLoop, LoopConfig, LoopControl, RedrawScheduler};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Demo app: cursor positions arrive per OS event, the throttle lets at most
/// one through per redraw. Right-click drops a pending report, Escape quits.
struct CursorDemo {
    throttle: FrameThrottle<RedrawScheduler, (f64, f64)>,
}

impl App for CursorDemo {
    fn on_window_event(&mut self, event: &WindowEvent) -> LoopControl {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.throttle.call((position.x, position.y));
                LoopControl::Continue
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Right,
                ..
            } => {
                self.throttle.cancel();
                log::info!("pending cursor report cancelled");
                LoopControl::Continue
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                LoopControl::Exit
            }

            WindowEvent::CloseRequested => LoopControl::Exit,

            _ => LoopControl::Continue,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Startup banner — printed before the window opens.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          FRAMEGATE DEMO v0.1           ║");
    println!("  ║  one cursor report per redraw, max     ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  move mouse   -> throttled log line    ║");
    println!("  ║  right-click  -> cancel pending report ║");
    println!("  ║  escape       -> quit                  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    init_logging(None);

    let scheduler = RedrawScheduler::new();
    let throttle = FrameThrottle::new(scheduler.clone(), |(x, y): (f64, f64)| {
        log::info!("cursor at ({x:.0}, {y:.0})");
    });

    let config = LoopConfig {
        title: "framegate demo".to_string(),
        initial_size: LogicalSize::new(820.0, 560.0),
    };

    FrameLoop::run(config, scheduler, CursorDemo { throttle })
}
