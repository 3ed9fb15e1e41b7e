//! Per-demo state and update rules, kept apart from the window so the frame
//! logic can run headless.

use crate::canvas::Canvas;
use crate::rng::Rng32;
use crate::shapes::{Shape, ShapeKind};
use crate::types::Color;
use crate::walker::{RandomWalker, StepPolicy};

/// A shape sliding right at a fixed speed, wrapping back to the left edge.
pub struct Mover {
    pub shape: Shape,
    pub speed: i32,
}

impl Mover {
    /// Advance one frame inside a window `width` pixels wide.
    pub fn update(&mut self, width: i32) {
        let s = &mut self.shape;
        s.x += self.speed;
        let gone = match s.kind {
            ShapeKind::Circle { radius } => s.x - radius >= width,
            _ => s.x >= width,
        };
        if gone {
            let y = s.y;
            s.move_to(-s.extent(), y);
        }
    }
}

/// Two filled circles and an outlined square crossing the window.
pub struct ShapesSketch {
    pub movers: Vec<Mover>,
    width: i32,
}

impl ShapesSketch {
    pub fn new(width: i32, height: i32) -> Self {
        let mid = height / 2;
        let movers = vec![
            Mover { shape: Shape::circle(0, mid, 100, Color::RED, true), speed: 3 },
            Mover { shape: Shape::circle(0, mid, 50, Color::GREEN, true), speed: 4 },
            Mover { shape: Shape::rectangle(0, mid, 80, 80, Color::BLUE, false), speed: 2 },
        ];
        Self { movers, width }
    }

    pub fn update(&mut self) {
        for m in &mut self.movers {
            m.update(self.width);
        }
    }

    /// Clear to white, then draw every shape.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.set_draw_color(Color::WHITE);
        canvas.clear();
        for m in &self.movers {
            m.shape.draw(canvas);
        }
    }
}

/// Walkers that leave trails; the canvas is never cleared between frames.
pub struct WalkersSketch {
    pub walkers: Vec<(RandomWalker, StepPolicy)>,
}

impl WalkersSketch {
    pub fn new(width: i32, height: i32, rng: &mut Rng32) -> Self {
        let mut spawn = |x, y, color| {
            let seed = rng.next_u32();
            RandomWalker::new(x, y, color, width, height, Rng32::from_seed(seed))
        };
        let four = StepPolicy::Four { magnitude: 2 };
        let eight = StepPolicy::Eight { magnitude: 2 };
        let drift = StepPolicy::Perlin { step: 0.005 };
        let walkers = vec![
            (spawn(width / 3, height / 2, Color::rgba(255, 0, 0, 100)), four),
            (spawn(2 * width / 3, height / 2, Color::rgba(0, 0, 255, 100)), eight),
            (spawn(width / 2, height / 3, Color::rgba(0, 255, 0, 100)), eight),
            (spawn(width / 2, height / 2, Color::rgba(0, 0, 0, 100)), drift),
        ];
        Self { walkers }
    }

    pub fn update(&mut self) {
        for (walker, policy) in &mut self.walkers {
            walker.advance(*policy);
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for (walker, _) in &self.walkers {
            walker.draw(canvas);
        }
    }
}

/// Colour/alpha modulation driven by the Q/W/E/A keys; each press adds 32,
/// wrapping past 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulation {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Default for Modulation {
    fn default() -> Self {
        Self { r: 255, g: 255, b: 255, a: 255 }
    }
}

impl Modulation {
    pub const STEP: u8 = 32;

    pub fn bump(&mut self, channel: Channel) {
        let c = match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
            Channel::Alpha => &mut self.a,
        };
        *c = c.wrapping_add(Self::STEP);
    }
}

/// Which of the five bitmaps the key-press demo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySurface {
    Default = 0,
    Up,
    Down,
    Left,
    Right,
}

impl KeySurface {
    pub const ALL: [KeySurface; 5] = [
        KeySurface::Default,
        KeySurface::Up,
        KeySurface::Down,
        KeySurface::Left,
        KeySurface::Right,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            KeySurface::Default => "default.bmp",
            KeySurface::Up => "up.bmp",
            KeySurface::Down => "down.bmp",
            KeySurface::Left => "left.bmp",
            KeySurface::Right => "right.bmp",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
