// Immediate-mode drawing surface.
// Shapes only talk to the `Canvas` trait, so tests can record calls while the
// sketches draw into a software `Renderer` that owns the frame buffer.

use crate::types::{Color, FrameBuffer, Rect};

/// How a drawn colour combines with what is already in the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination pixel.
    None,
    /// dst = src * a + dst * (1 - a)
    #[default]
    Blend,
}

/// The primitives a sketch can issue. Coordinates are window pixels;
/// anything off-screen is clipped silently.
pub trait Canvas {
    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn draw_point(&mut self, x: i32, y: i32);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    fn draw_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
}

/// Blend one channel: `src * a + dst * (1 - a)` in 0..=255 integer space.
#[inline]
pub(crate) fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

/// Write `color` at `idx`, honouring the blend mode.
#[inline]
pub(crate) fn write_pixel(fb: &mut FrameBuffer, idx: usize, color: Color, mode: BlendMode) {
    let out = match mode {
        BlendMode::None => color,
        BlendMode::Blend if color.a == 255 => color,
        BlendMode::Blend => {
            let dst = Color::from_rgb_u32(fb.pixels[idx]);
            Color::rgba(
                blend_channel(color.r, dst.r, color.a),
                blend_channel(color.g, dst.g, color.a),
                blend_channel(color.b, dst.b, color.a),
                255,
            )
        }
    };
    fb.pixels[idx] = out.to_rgb_u32();
}

/// Software renderer: a frame buffer plus the current draw state.
pub struct Renderer {
    frame: FrameBuffer,
    draw_color: Color,
    blend: BlendMode,
}

impl Renderer {
    /// New renderer cleared to white, blending with alpha.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: FrameBuffer::new(width, height, Color::WHITE),
            draw_color: Color::WHITE,
            blend: BlendMode::Blend,
        }
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    pub fn width(&self) -> usize {
        self.frame.width
    }

    pub fn height(&self) -> usize {
        self.frame.height
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.frame.index_of(x, y) {
            write_pixel(&mut self.frame, idx, self.draw_color, self.blend);
        }
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32) {
        if y < 0 || y >= self.frame.height as i32 {
            return;
        }
        let lo = x0.min(x1).max(0);
        let hi = x0.max(x1).min(self.frame.width as i32 - 1);
        for x in lo..=hi {
            self.put_pixel(x, y);
        }
    }
}

impl Canvas for Renderer {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Clear ignores blending: every pixel becomes the draw colour.
    fn clear(&mut self) {
        let px = self.draw_color.to_rgb_u32();
        self.frame.pixels.fill(px);
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.put_pixel(x, y);
    }

    /// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        if y0 == y1 {
            self.hline(x0, x1, y0);
            return;
        }
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_pixel(x0, y0);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    fn draw_rect(&mut self, rect: Rect) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let (x1, y1) = (rect.x + rect.w - 1, rect.y + rect.h - 1);
        self.hline(rect.x, x1, rect.y);
        if rect.h > 1 {
            self.hline(rect.x, x1, y1);
        }
        // Vertical edges skip the corners the horizontal edges already hit.
        for y in (rect.y + 1)..y1 {
            self.put_pixel(rect.x, y);
            if rect.w > 1 {
                self.put_pixel(x1, y);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        for y in rect.y..rect.y + rect.h {
            self.hline(rect.x, rect.x + rect.w - 1, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &FrameBuffer, color: Color) -> usize {
        let px = color.to_rgb_u32();
        fb.pixels.iter().filter(|p| **p == px).count()
    }

    #[test]
    fn starts_white_and_clears_to_draw_color() {
        let mut r = Renderer::new(8, 6);
        assert_eq!(count(r.frame(), Color::WHITE), 48);
        r.set_draw_color(Color::BLUE);
        r.clear();
        assert_eq!(count(r.frame(), Color::BLUE), 48);
    }

    #[test]
    fn outline_rect_touches_only_the_border() {
        let mut r = Renderer::new(10, 10);
        r.set_draw_color(Color::RED);
        r.draw_rect(Rect::new(2, 2, 4, 3));
        // 4 + 4 on top/bottom, 1 + 1 on the single middle row
        assert_eq!(count(r.frame(), Color::RED), 10);
        assert_eq!(r.frame().pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn fill_rect_clips_to_the_buffer() {
        let mut r = Renderer::new(10, 10);
        r.set_draw_color(Color::GREEN);
        r.fill_rect(Rect::new(-5, 8, 8, 8));
        assert_eq!(count(r.frame(), Color::GREEN), 3 * 2);
    }

    #[test]
    fn diagonal_line_hits_both_ends() {
        let mut r = Renderer::new(10, 10);
        r.set_draw_color(Color::BLACK);
        r.draw_line(0, 0, 9, 9);
        assert_eq!(count(r.frame(), Color::BLACK), 10);
        assert_eq!(r.frame().pixel(9, 9), Some(Color::BLACK));
    }

    #[test]
    fn translucent_points_blend_with_the_background() {
        let mut r = Renderer::new(2, 1);
        r.set_draw_color(Color::rgba(0, 0, 0, 128));
        r.draw_point(0, 0);
        let c = r.frame().pixel(0, 0).unwrap();
        assert_eq!((c.r, c.g, c.b), (127, 127, 127));

        r.set_blend_mode(BlendMode::None);
        r.draw_point(1, 0);
        assert_eq!(r.frame().pixel(1, 0), Some(Color::BLACK));
    }
}
