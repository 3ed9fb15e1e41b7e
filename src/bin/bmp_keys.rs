// Bitmap tutorial: the window starts white; arrow keys show the matching
// bitmap stretched over the whole window, any other key shows the default.

use minifb::Key;
use pixel_sketches::config::{self, WindowConfig};
use pixel_sketches::draw::{Drawer, Event};
use pixel_sketches::logging::{init_logging, report_fatal, LoggingConfig};
use pixel_sketches::sketch::KeySurface;
use pixel_sketches::texture::Surface;
use pixel_sketches::{Color, Error, FrameBuffer, Rect};

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::for_sketch(env!("CARGO_BIN_NAME")));
    run().inspect_err(report_fatal)
}

fn surface_for_key(key: Key) -> KeySurface {
    match key {
        Key::Up => KeySurface::Up,
        Key::Down => KeySurface::Down,
        Key::Left => KeySurface::Left,
        Key::Right => KeySurface::Right,
        _ => KeySurface::Default,
    }
}

/// Load all five bitmaps; the first failure aborts.
fn load_surfaces() -> Result<Vec<Surface>, Error> {
    KeySurface::ALL
        .iter()
        .map(|s| Surface::load_bmp(config::asset(s.file_name())))
        .collect()
}

fn run() -> Result<(), Error> {
    /* --- Window: just open it and color it white --- */
    let config = WindowConfig::titled("Bitmap Keys");
    let mut drawer = Drawer::new(&config)?;
    let mut screen = FrameBuffer::new(drawer.width(), drawer.height(), Color::WHITE);
    drawer.present(&screen)?;

    let surfaces = load_surfaces()?;
    let stretch = Rect::new(0, 0, screen.width as i32, screen.height as i32);

    let mut quit = false;
    while !quit {
        for event in drawer.poll_events() {
            match event {
                Event::Quit => quit = true,
                Event::KeyDown(key) => {
                    log::info!("Key pressed: {key:?}");
                    let current = surface_for_key(key);
                    surfaces[current.index()].blit_scaled(&mut screen, stretch);
                }
            }
        }
        // minifb only pumps input while we keep updating the window
        drawer.present(&screen)?;
    }

    Ok(())
}
