// Core value types shared by every sketch.

/// RGBA colour, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0x00RRGGBB (alpha dropped) for the window buffer.
    #[inline]
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub fn from_rgb_u32(px: u32) -> Self {
        Self::rgba((px >> 16) as u8, (px >> 8) as u8, px as u8, 255)
    }
}

/// Integer rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self { width, height, pixels: vec![fill.to_rgb_u32(); width * height] }
    }

    /// Index of (x,y) if it lies inside the buffer.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|idx| Color::from_rgb_u32(self.pixels[idx]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packs_as_xrgb() {
        assert_eq!(Color::rgba(0x12, 0x34, 0x56, 0x00).to_rgb_u32(), 0x0012_3456);
        assert_eq!(Color::from_rgb_u32(0x00FF_8001), Color::rgba(0xFF, 0x80, 0x01, 255));
    }

    #[test]
    fn out_of_bounds_has_no_index() {
        let fb = FrameBuffer::new(4, 3, Color::WHITE);
        assert_eq!(fb.index_of(3, 2), Some(11));
        assert_eq!(fb.index_of(4, 0), None);
        assert_eq!(fb.index_of(0, -1), None);
        assert_eq!(fb.pixel(1, 1), Some(Color::WHITE));
    }
}
