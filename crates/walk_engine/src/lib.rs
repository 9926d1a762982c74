pub mod app;
pub mod assets;

pub use app::{
    run_app, AppError, Canvas, Font, Image, ImageRegion, InputSnapshot, Key, LoopConfig,
    LoopStats, Rect, Renderer, Scene, SceneCommand,
};
pub use assets::{decode_image, ArchiveEntry, AssetError, AssetProvider, HttpAssetProvider};
