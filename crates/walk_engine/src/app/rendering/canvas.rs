use super::{Font, ImageRegion};

/// Drawing surface over an RGBA8 frame buffer. All drawing is clipped.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Returns `None` if `frame` is too small for `width * height` pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        let required = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (frame.len() >= required).then_some(Self {
            frame,
            width,
            height,
        })
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let offset = self.byte_offset(x, y)?;
        let bytes = &self.frame[offset..offset + 4];
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: [u8; 4]) {
        let left = x.max(0);
        let top = y.max(0);
        let right = x.saturating_add(width as i32).min(self.width as i32);
        let bottom = y.saturating_add(height as i32).min(self.height as i32);
        for py in top..bottom {
            for px in left..right {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Draws `region` with its top-left corner at `(x, y)`, scaled by nearest-neighbour sampling.
    pub fn draw_image(
        &mut self,
        region: ImageRegion<'_>,
        x: i32,
        y: i32,
        scale_x: f32,
        scale_y: f32,
    ) {
        if region.is_empty() || self.width == 0 || self.height == 0 {
            return;
        }
        let scale_x = normalized_scale(scale_x);
        let scale_y = normalized_scale(scale_y);
        let scaled_w = (region.width() as f32 * scale_x).round().max(1.0) as i32;
        let scaled_h = (region.height() as f32 * scale_y).round().max(1.0) as i32;

        let draw_left = x.max(0);
        let draw_top = y.max(0);
        let draw_right = x.saturating_add(scaled_w).min(self.width as i32);
        let draw_bottom = y.saturating_add(scaled_h).min(self.height as i32);
        if draw_left >= draw_right || draw_top >= draw_bottom {
            return;
        }

        let inv_x = scale_x.recip();
        let inv_y = scale_y.recip();
        for out_y in draw_top..draw_bottom {
            let src_y = (((out_y - y) as f32) * inv_y).floor() as u32;
            let src_y = src_y.min(region.height() - 1);
            for out_x in draw_left..draw_right {
                let src_x = (((out_x - x) as f32) * inv_x).floor() as u32;
                let src_x = src_x.min(region.width() - 1);
                if let Some(color) = region.pixel(src_x, src_y) {
                    self.blend_pixel(out_x, out_y, color);
                }
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, font: &Font, x: i32, y: i32, color: [u8; 4]) {
        let scale = font.scale();
        let mut pen_x = x;
        let mut pen_y = y;
        for ch in text.chars() {
            if ch == '\n' {
                pen_x = x;
                pen_y += font.line_height();
                continue;
            }
            for (col, row) in font.lit_cells(ch) {
                self.fill_rect(
                    pen_x + col * scale,
                    pen_y + row * scale,
                    scale as u32,
                    scale as u32,
                    color,
                );
            }
            pen_x += font.glyph_advance();
        }
    }

    fn byte_offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let pixel_offset = (y as usize)
            .checked_mul(self.width as usize)
            .and_then(|row| row.checked_add(x as usize))?;
        let byte_offset = pixel_offset.checked_mul(4)?;
        (byte_offset.checked_add(4)? <= self.frame.len()).then_some(byte_offset)
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        let Some(offset) = self.byte_offset(x, y) else {
            return;
        };
        let alpha = color[3];
        if alpha == 0 {
            return;
        }
        let dst = &mut self.frame[offset..offset + 4];
        if alpha == u8::MAX {
            dst.copy_from_slice(&color);
            return;
        }
        let a = alpha as u16;
        for channel in 0..3 {
            let blended = (color[channel] as u16 * a + dst[channel] as u16 * (255 - a)) / 255;
            dst[channel] = blended as u8;
        }
        dst[3] = dst[3].max(alpha);
    }
}

fn normalized_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Image, Rect};

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn canvas_rejects_undersized_frame() {
        let mut frame = vec![0u8; 15];
        assert!(Canvas::new(&mut frame, 2, 2).is_none());
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4).expect("canvas");
        canvas.clear(RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn draw_image_anchors_top_left_and_scales() {
        let mut frame = vec![0u8; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10).expect("canvas");
        canvas.clear(BLACK);
        let sprite = Image::solid(2, 2, RED);

        canvas.draw_image(sprite.full(), 3, 4, 1.5, 1.5);

        assert_eq!(canvas.pixel(3, 4), Some(RED));
        assert_eq!(canvas.pixel(5, 6), Some(RED));
        assert_eq!(canvas.pixel(6, 4), Some(BLACK));
        assert_eq!(canvas.pixel(2, 4), Some(BLACK));
    }

    #[test]
    fn draw_image_clips_at_negative_and_far_edges() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4).expect("canvas");
        canvas.clear(BLACK);
        let sprite = Image::solid(3, 3, RED);

        canvas.draw_image(sprite.full(), -2, -2, 1.0, 1.0);
        canvas.draw_image(sprite.full(), 3, 3, 1.0, 1.0);

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
    }

    #[test]
    fn draw_image_samples_cropped_region() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let mut canvas = Canvas::new(&mut frame, 2, 2).expect("canvas");
        let mut source = image::RgbaImage::new(4, 4);
        source.put_pixel(2, 3, image::Rgba(RED));
        let world = Image::from(source);

        canvas.draw_image(world.region(Rect::new(2, 2, 2, 2)), 0, 0, 1.0, 1.0);

        assert_eq!(canvas.pixel(0, 1), Some(RED));
    }

    #[test]
    fn transparent_pixels_leave_destination_untouched() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let mut canvas = Canvas::new(&mut frame, 2, 2).expect("canvas");
        canvas.clear(BLACK);
        canvas.draw_image(Image::solid(2, 2, [255, 255, 255, 0]).full(), 0, 0, 1.0, 1.0);
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
    }

    #[test]
    fn translucent_pixels_blend_over_destination() {
        let mut frame = vec![0u8; 4];
        let mut canvas = Canvas::new(&mut frame, 1, 1).expect("canvas");
        canvas.clear(BLACK);
        canvas.fill_rect(0, 0, 1, 1, [255, 0, 0, 51]);
        assert_eq!(canvas.pixel(0, 0), Some([51, 0, 0, 255]));
    }

    #[test]
    fn draw_text_lights_glyph_cells_at_font_scale() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        let mut canvas = Canvas::new(&mut frame, 16, 16).expect("canvas");
        canvas.clear(BLACK);
        let font = Font::with_scale(2);

        canvas.draw_text("-", &font, 0, 0, RED);

        // '-' lights the middle row only.
        assert_eq!(canvas.pixel(0, 4), Some(RED));
        assert_eq!(canvas.pixel(5, 5), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
        assert_eq!(canvas.pixel(6, 4), Some(BLACK));
    }
}
