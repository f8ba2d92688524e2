use std::rc::Rc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::{App, LoopControl};
use crate::scheduler::RedrawScheduler;

/// Window configuration for [`FrameLoop`].
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            title: "framegate".to_string(),
            initial_size: LogicalSize::new(960.0, 540.0),
        }
    }
}

/// Entry point: a single-window event loop pumping a [`RedrawScheduler`].
pub struct FrameLoop;

impl FrameLoop {
    /// Runs the loop until the app requests exit.
    ///
    /// The window is created when the loop starts and bound to `scheduler`;
    /// each `RedrawRequested` drives `scheduler.tick()`, every other window
    /// event goes to `app`. Blocks for the lifetime of the loop.
    pub fn run<A>(config: LoopConfig, scheduler: RedrawScheduler, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = LoopState {
            config,
            scheduler,
            app,
            window: None,
            exit_requested: false,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct LoopState<A>
where
    A: App + 'static,
{
    config: LoopConfig,
    scheduler: RedrawScheduler,
    app: A,

    window: Option<Rc<Window>>,
    exit_requested: bool,
}

impl<A> ApplicationHandler for LoopState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Rc::new(window);
                self.scheduler.bind_window(Rc::clone(&window));
                self.window = Some(window);
                log::debug!("window created, scheduler bound");
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Sleep until the next event; scheduled callbacks wake the loop
        // through their redraw requests.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::RedrawRequested => {
                let ran = self.scheduler.tick();
                if ran > 0 {
                    log::trace!("frame tick ran {ran} scheduled callback(s)");
                }
            }

            _ => {
                if self.app.on_window_event(&event) == LoopControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }
        }
    }
}
