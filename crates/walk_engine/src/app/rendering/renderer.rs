use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use tracing::warn;
use winit::window::Window;

use crate::app::Scene;

use super::Canvas;

const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Presents a fixed-size logical buffer, scaled to whatever size the window surface has.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(
            Arc::clone(&window),
            size.width,
            size.height,
            buffer_width,
            buffer_height,
        )?;
        Ok(Self {
            window,
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(
            Arc::clone(&self.window),
            width,
            height,
            self.buffer_width,
            self.buffer_height,
        )?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(buffer_width, buffer_height, surface)
    }

    pub fn render_scene(&mut self, scene: &dyn Scene) -> Result<(), Error> {
        if self.buffer_width == 0 || self.buffer_height == 0 {
            return Ok(());
        }

        let frame = self.pixels.frame_mut();
        match Canvas::new(frame, self.buffer_width, self.buffer_height) {
            Some(mut canvas) => {
                canvas.clear(CLEAR_COLOR);
                scene.render(&mut canvas);
            }
            None => warn!(
                buffer_width = self.buffer_width,
                buffer_height = self.buffer_height,
                "frame_buffer_too_small"
            ),
        }
        self.pixels.render()
    }
}
