use std::io::Cursor;

use image::{ImageFormat, ImageReader, ImageResult};

/// Decoded RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A borrowed sub-rectangle of an [`Image`], always within its bounds.
#[derive(Debug, Clone, Copy)]
pub struct ImageRegion<'a> {
    image: &'a Image,
    rect: Rect,
}

impl Image {
    pub fn from_png_bytes(bytes: &[u8]) -> ImageResult<Self> {
        let decoded = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png).decode()?;
        let image = decoded.to_rgba8();
        Ok(Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        })
    }

    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.rgba.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn full(&self) -> ImageRegion<'_> {
        ImageRegion {
            image: self,
            rect: Rect::new(0, 0, self.width, self.height),
        }
    }

    /// Crops to `rect`, clamped to the image bounds.
    pub fn region(&self, rect: Rect) -> ImageRegion<'_> {
        let x = rect.x.min(self.width);
        let y = rect.y.min(self.height);
        let width = rect.width.min(self.width - x);
        let height = rect.height.min(self.height - y);
        ImageRegion {
            image: self,
            rect: Rect::new(x, y, width, height),
        }
    }
}

impl<'a> ImageRegion<'a> {
    pub fn width(&self) -> u32 {
        self.rect.width
    }

    pub fn height(&self) -> u32 {
        self.rect.height
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_empty(&self) -> bool {
        self.rect.width == 0 || self.rect.height == 0
    }

    /// Pixel at region-local coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.rect.width || y >= self.rect.height {
            return None;
        }
        self.image.pixel(self.rect.x + x, self.rect.y + y)
    }
}

impl From<image::RgbaImage> for Image {
    fn from(image: image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(image: image::RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn png_bytes_decode_to_rgba_with_dimensions() {
        let mut source = image::RgbaImage::new(3, 2);
        source.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
        let decoded = Image::from_png_bytes(&encode_png(source)).expect("decode");

        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.pixel(2, 1), Some([10, 20, 30, 255]));
        assert_eq!(decoded.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn malformed_png_bytes_fail_to_decode() {
        assert!(Image::from_png_bytes(b"definitely not a png").is_err());
    }

    #[test]
    fn region_is_clamped_to_image_bounds() {
        let image = Image::solid(100, 50, [1, 2, 3, 255]);

        let inside = image.region(Rect::new(10, 10, 20, 20));
        assert_eq!(inside.rect(), Rect::new(10, 10, 20, 20));

        let overhanging = image.region(Rect::new(90, 40, 640, 480));
        assert_eq!(overhanging.rect(), Rect::new(90, 40, 10, 10));

        let outside = image.region(Rect::new(200, 200, 5, 5));
        assert!(outside.is_empty());
    }

    #[test]
    fn region_pixels_are_offset_by_origin() {
        let mut source = image::RgbaImage::new(4, 4);
        source.put_pixel(3, 2, image::Rgba([9, 9, 9, 255]));
        let image = Image::from(source);
        let region = image.region(Rect::new(2, 1, 2, 2));

        assert_eq!(region.pixel(1, 1), Some([9, 9, 9, 255]));
        assert_eq!(region.pixel(2, 0), None);
    }
}
