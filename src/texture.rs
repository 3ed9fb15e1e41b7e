// Image assets: opaque bitmap surfaces for the key-press demo and colour-keyed
// RGBA textures for the sprite demo. Decoding goes through the `image` crate.

use crate::canvas::{blend_channel, write_pixel, BlendMode, Renderer};
use crate::error::Error;
use crate::types::{Color, FrameBuffer, Rect};
use image::RgbaImage;
use std::path::Path;

/// Pixels matching this colour become fully transparent when loaded.
pub const COLOR_KEY: (u8, u8, u8) = (0x00, 0xFF, 0xFF);

fn decode(path: &Path) -> Result<RgbaImage, Error> {
    let img = image::open(path).map_err(|e| Error::asset(path, e))?;
    Ok(img.to_rgba8())
}

/// An opaque image already converted to the window's pixel format, so
/// blitting never has to convert again.
#[derive(Clone)]
pub struct Surface {
    pixels: FrameBuffer,
}

impl Surface {
    pub fn load_bmp(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let rgba = decode(path)?;
        log::debug!("loaded surface {} ({}x{})", path.display(), rgba.width(), rgba.height());
        Ok(Self::from_rgba(&rgba))
    }

    pub fn from_rgba(rgba: &RgbaImage) -> Self {
        let (w, h) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| Color::rgba(p[0], p[1], p[2], 255).to_rgb_u32())
            .collect();
        Self { pixels: FrameBuffer { width: w as usize, height: h as usize, pixels } }
    }

    pub fn width(&self) -> usize {
        self.pixels.width
    }

    pub fn height(&self) -> usize {
        self.pixels.height
    }

    /// Stretch the whole surface over `dst` in `fb` (nearest neighbour).
    pub fn blit_scaled(&self, fb: &mut FrameBuffer, dst: Rect) {
        if dst.w <= 0 || dst.h <= 0 || self.width() == 0 || self.height() == 0 {
            return;
        }
        for dy in 0..dst.h {
            let sy = (dy as usize * self.height()) / dst.h as usize;
            for dx in 0..dst.w {
                let Some(idx) = fb.index_of(dst.x + dx, dst.y + dy) else { continue };
                let sx = (dx as usize * self.width()) / dst.w as usize;
                fb.pixels[idx] = self.pixels.pixels[sy * self.width() + sx];
            }
        }
    }
}

/// RGBA texture with colour/alpha modulation, like a GPU texture handle.
pub struct Texture {
    image: RgbaImage,
    color_mod: (u8, u8, u8),
    alpha_mod: u8,
    blend: BlendMode,
}

impl Texture {
    /// Load a PNG (or anything `image` decodes) and colour-key cyan out.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let rgba = decode(path)?;
        log::debug!("loaded texture {} ({}x{})", path.display(), rgba.width(), rgba.height());
        Ok(Self::from_rgba(rgba))
    }

    pub fn from_rgba(mut image: RgbaImage) -> Self {
        let (kr, kg, kb) = COLOR_KEY;
        for p in image.pixels_mut() {
            if p[0] == kr && p[1] == kg && p[2] == kb {
                p[3] = 0;
            }
        }
        Self { image, color_mod: (255, 255, 255), alpha_mod: 255, blend: BlendMode::Blend }
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color_mod = (r, g, b);
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha_mod = alpha;
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    /// Copy `clip` (or the whole texture) to (x,y) at its natural size.
    pub fn render(&self, renderer: &mut Renderer, x: i32, y: i32, clip: Option<Rect>) {
        let src = clip.unwrap_or(Rect::new(0, 0, self.width(), self.height()));
        let (mr, mg, mb) = self.color_mod;
        let fb = renderer.frame_mut();
        for row in 0..src.h {
            for col in 0..src.w {
                let (sx, sy) = (src.x + col, src.y + row);
                if sx < 0 || sy < 0 || sx >= self.width() || sy >= self.height() {
                    continue;
                }
                let Some(idx) = fb.index_of(x + col, y + row) else { continue };
                let p = self.image.get_pixel(sx as u32, sy as u32);
                let color = Color::rgba(
                    modulate(p[0], mr),
                    modulate(p[1], mg),
                    modulate(p[2], mb),
                    modulate(p[3], self.alpha_mod),
                );
                write_pixel(fb, idx, color, self.blend);
            }
        }
    }
}

#[inline]
fn modulate(c: u8, m: u8) -> u8 {
    blend_channel(c, 0, m)
}
