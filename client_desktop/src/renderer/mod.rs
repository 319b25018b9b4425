//! Window surface plus the CPU rasterizer that fills it

pub mod raster;

use std::sync::Arc;

use game_core::Game;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::error::ClientError;
use raster::{clear, FrameSink, Rasterizer};

pub struct Renderer {
    pixels: Pixels<'static>,
    raster: Rasterizer,
}

impl Renderer {
    /// Create a `width` x `height` logical frame scaled onto the window
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, ClientError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            raster: Rasterizer::new(width, height),
        })
    }

    /// Resize the rendering surface
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ClientError> {
        if width > 0 && height > 0 {
            self.pixels.resize_surface(width, height)?;
        }
        Ok(())
    }

    /// Clear, let the game emit its shapes, present
    pub fn draw(&mut self, game: &mut Game) -> Result<(), ClientError> {
        let frame = self.pixels.frame_mut();
        clear(frame);

        let mut sink = FrameSink {
            frame,
            raster: &mut self.raster,
        };
        game.draw(&mut sink);

        self.pixels.render()?;
        Ok(())
    }
}
