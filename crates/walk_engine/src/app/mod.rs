mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::Key;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopStats;
pub use rendering::{Canvas, Font, Image, ImageRegion, Rect, Renderer};
pub use scene::{InputSnapshot, Scene, SceneCommand};
