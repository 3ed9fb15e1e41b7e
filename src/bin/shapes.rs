// Two filled circles and an outlined square slide across a white window,
// wrapping back to the left edge. Close the window (or ESC) to quit.

use pixel_sketches::config::WindowConfig;
use pixel_sketches::draw::{Drawer, Event};
use pixel_sketches::logging::{init_logging, report_fatal, LoggingConfig};
use pixel_sketches::sketch::ShapesSketch;
use pixel_sketches::{Error, Renderer};

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::for_sketch(env!("CARGO_BIN_NAME")));
    run().inspect_err(report_fatal)
}

fn run() -> Result<(), Error> {
    /* --- Window + renderer --- */
    let config = WindowConfig::titled("Fun With Shapes").with_frame_delay(60);
    let mut drawer = Drawer::new(&config)?;
    let mut renderer = Renderer::new(drawer.width(), drawer.height());

    let mut sketch = ShapesSketch::new(drawer.width() as i32, drawer.height() as i32);

    /* ------------------------------ Main loop ------------------------------ */
    let mut quit = false;
    while !quit {
        for event in drawer.poll_events() {
            if event == Event::Quit {
                quit = true;
            }
        }

        sketch.update();
        sketch.draw(&mut renderer);

        drawer.present(renderer.frame())?;
        config.pace();
    }

    log::info!("bye");
    Ok(())
}
