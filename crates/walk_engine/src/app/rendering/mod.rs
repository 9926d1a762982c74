mod bitmap;
mod canvas;
mod font;
mod renderer;

pub use bitmap::{Image, ImageRegion, Rect};
pub use canvas::Canvas;
pub use font::Font;
pub use renderer::Renderer;
