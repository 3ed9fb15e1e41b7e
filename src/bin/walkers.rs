// Random walkers leave translucent trails on a white canvas that is cleared
// only once. Red steps 4 ways, blue and green step 8 ways, black drifts on
// Perlin noise.

use pixel_sketches::config::WindowConfig;
use pixel_sketches::draw::{Drawer, Event};
use pixel_sketches::logging::{init_logging, report_fatal, LoggingConfig};
use pixel_sketches::rng::Rng32;
use pixel_sketches::sketch::WalkersSketch;
use pixel_sketches::{Canvas, Color, Error, Renderer};

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::for_sketch(env!("CARGO_BIN_NAME")));
    run().inspect_err(report_fatal)
}

fn run() -> Result<(), Error> {
    let config = WindowConfig::titled("Random Walkers").with_frame_delay(10);
    let mut drawer = Drawer::new(&config)?;
    let mut renderer = Renderer::new(drawer.width(), drawer.height());

    let mut rng = Rng32::from_time();
    let mut sketch = WalkersSketch::new(drawer.width() as i32, drawer.height() as i32, &mut rng);

    // clear screen once; trails accumulate from here on
    renderer.set_draw_color(Color::WHITE);
    renderer.clear();

    let mut quit = false;
    while !quit {
        quit = drawer.poll_events().contains(&Event::Quit);

        sketch.update();
        sketch.draw(&mut renderer);

        drawer.present(renderer.frame())?;
        config.pace();
    }

    Ok(())
}
