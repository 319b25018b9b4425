//! winit host: window lifecycle, keyboard, fixed-step scheduling

use std::sync::Arc;
use std::time::Instant;

use game_core::{Game, InputState, Params, TickClock};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::error::ClientError;
use crate::input::handle_key;
use crate::renderer::Renderer;

pub struct App {
    game: Game,
    input: InputState,
    clock: TickClock,
    last_frame: Option<Instant>,

    // Window and rendering (initialized on resume)
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,

    // First fatal error; the event loop exits as soon as it is set
    error: Option<ClientError>,
}

impl App {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            input: InputState::new(),
            clock: TickClock::new(),
            last_frame: None,
            window: None,
            renderer: None,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<ClientError> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let (width, height) = self.game.layout(0, 0);
        let window_attrs = Window::default_attributes()
            .with_title(Params::WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                width * Params::WINDOW_SCALE,
                height * Params::WINDOW_SCALE,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = Renderer::new(Arc::clone(&window), width, height)?;

        let size = window.inner_size();
        log::info!(
            "window {}x{} physical, {}x{} logical",
            size.width,
            size.height,
            width,
            height
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    /// Run however many fixed ticks are due since the last frame
    fn advance(&mut self) {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        for _ in 0..self.clock.advance(elapsed) {
            self.game.update(&self.input);
        }
    }

    fn redraw(&mut self) -> Result<(), ClientError> {
        self.advance();
        match self.renderer.as_mut() {
            Some(renderer) => renderer.draw(&mut self.game),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state.is_pressed() {
                    event_loop.exit();
                } else {
                    handle_key(&mut self.input, code, state);
                }
            }
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused
                self.input.clear();
            }
            WindowEvent::Resized(size) => {
                let result = match self.renderer.as_mut() {
                    Some(renderer) => renderer.resize(size.width, size.height),
                    None => Ok(()),
                };
                if let Err(err) = result {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
