// Random walkers: small outlined circles that wander around the window.

use crate::canvas::Canvas;
use crate::noise::Perlin;
use crate::rng::Rng32;
use crate::shapes::Shape;
use crate::types::Color;

pub const WALKER_RADIUS: i32 = 2;

/// Seed offsets for the noise cursors. `ty` starts far away from `tx` so the
/// two axes sample unrelated stretches of the noise field.
pub const TX_SEED: f64 = 0.01;
pub const TY_SEED: f64 = 1000.0;
/// Cursors past this are reset to their seed offsets.
pub const CURSOR_LIMIT: f64 = 1e6;

/// Which stepping rule a walker follows each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPolicy {
    /// Up, down, left or right by `magnitude`.
    Four { magnitude: i32 },
    /// Any of the four axes or four diagonals; diagonals move `magnitude`
    /// on both axes.
    Eight { magnitude: i32 },
    /// Absolute position from noise; cursors advance by `step`.
    Perlin { step: f64 },
}

pub struct RandomWalker {
    shape: Shape,
    rng: Rng32,
    perlin: Perlin,
    tx: f64,
    ty: f64,
    bounds: (i32, i32),
}

impl RandomWalker {
    /// A walker at (x,y) inside a `width` x `height` window. The noise
    /// lattice is filled from `rng` once; the same generator then picks
    /// step directions.
    pub fn new(x: i32, y: i32, color: Color, width: i32, height: i32, mut rng: Rng32) -> Self {
        let perlin = Perlin::new(&mut rng);
        Self {
            shape: Shape::circle(x, y, WALKER_RADIUS, color, false),
            rng,
            perlin,
            tx: TX_SEED,
            ty: TY_SEED,
            bounds: (width, height),
        }
    }

    pub fn x(&self) -> i32 {
        self.shape.x
    }

    pub fn y(&self) -> i32 {
        self.shape.y
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn cursors(&self) -> (f64, f64) {
        (self.tx, self.ty)
    }

    pub fn advance(&mut self, policy: StepPolicy) {
        match policy {
            StepPolicy::Four { magnitude } => self.step(magnitude),
            StepPolicy::Eight { magnitude } => self.step8(magnitude),
            StepPolicy::Perlin { step } => self.perlin_step(step),
        }
    }

    /// Step up, down, left or right.
    pub fn step(&mut self, magnitude: i32) {
        let (dx, dy) = match self.rng.below(4) {
            0 => (magnitude, 0),
            1 => (-magnitude, 0),
            2 => (0, magnitude),
            _ => (0, -magnitude),
        };
        self.shape.x += dx;
        self.shape.y += dy;
    }

    /// Step in any of the eight grid directions.
    pub fn step8(&mut self, magnitude: i32) {
        let (dx, dy) = match self.rng.below(8) {
            0 => (magnitude, 0),
            1 => (-magnitude, 0),
            2 => (0, magnitude),
            3 => (0, -magnitude),
            4 => (magnitude, magnitude),
            5 => (-magnitude, magnitude),
            6 => (magnitude, -magnitude),
            _ => (-magnitude, -magnitude),
        };
        self.shape.x += dx;
        self.shape.y += dy;
    }

    /// Jump to the noise-mapped position for the current cursors, then
    /// advance both cursors by `step`.
    pub fn perlin_step(&mut self, step: f64) {
        if self.tx > CURSOR_LIMIT {
            self.tx = TX_SEED;
        }
        if self.ty > CURSOR_LIMIT {
            self.ty = TY_SEED;
        }
        let (w, h) = self.bounds;
        let nx = self.perlin.noise1(self.tx);
        let ny = self.perlin.noise1(self.ty);
        self.shape.x = map_unit(nx, w);
        self.shape.y = map_unit(ny, h);
        self.tx += step;
        self.ty += step;
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.shape.draw(canvas);
    }
}

/// Map a sample from [0,1] onto [0,dim].
#[inline]
fn map_unit(v: f64, dim: i32) -> i32 {
    (v.clamp(0.0, 1.0) * dim as f64) as i32
}
