//! Small software-rendered sketches: a bitmap key-press viewer, a sprite
//! animation, bouncing shapes and random walkers.
//!
//! Everything draws into a [`canvas::Renderer`] frame buffer which
//! [`draw::Drawer`] pushes to a `minifb` window.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod noise;
pub mod rng;
pub mod shapes;
pub mod sketch;
pub mod sprite;
pub mod texture;
pub mod types;
pub mod walker;

pub use canvas::{BlendMode, Canvas, Renderer};
pub use error::Error;
pub use shapes::{Shape, ShapeKind};
pub use types::{Color, FrameBuffer, Rect};
