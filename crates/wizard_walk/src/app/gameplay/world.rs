use walk_engine::{Image, ImageRegion, Rect};

use super::types::{Location, Size};

/// The scrollable background and the current scroll offset into it.
#[derive(Debug, Clone)]
pub(crate) struct World {
    background: Image,
    size: Size,
    pub(crate) scroll: Location,
}

impl World {
    pub(crate) fn new(background: Image) -> Self {
        let size = Size::new(
            i32::try_from(background.width()).unwrap_or(i32::MAX),
            i32::try_from(background.height()).unwrap_or(i32::MAX),
        );
        Self {
            background,
            size,
            scroll: Location::default(),
        }
    }

    pub(crate) fn size(&self) -> Size {
        self.size
    }

    /// The part of the background currently under the window.
    pub(crate) fn visible_region(&self, window: Size) -> ImageRegion<'_> {
        self.background.region(Rect::new(
            self.scroll.x.max(0) as u32,
            self.scroll.y.max(0) as u32,
            window.width.max(0) as u32,
            window.height.max(0) as u32,
        ))
    }
}
