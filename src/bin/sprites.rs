// Texture tutorial: a background map, four colour-modulated circle sprites in
// the corners, and a stick figure walking across the bottom.
// Q/W/E raise red/green/blue modulation, A raises alpha (each wraps).

use minifb::Key;
use pixel_sketches::config::{self, WindowConfig};
use pixel_sketches::draw::{Drawer, Event};
use pixel_sketches::logging::{init_logging, report_fatal, LoggingConfig};
use pixel_sketches::sketch::{Channel, Modulation};
use pixel_sketches::sprite::{SpriteSheet, WalkAnimation};
use pixel_sketches::texture::Texture;
use pixel_sketches::{BlendMode, Canvas, Color, Error, Renderer};

struct Media {
    background: Texture,
    circles: Texture,
    circle_clips: SpriteSheet,
    stick: Texture,
    stick_clips: SpriteSheet,
}

fn load_media() -> Result<Media, Error> {
    let background = Texture::load(config::asset("map.png"))?;
    let mut circles = Texture::load(config::asset("circles.png"))?;
    circles.set_blend_mode(BlendMode::Blend);
    let stick = Texture::load(config::asset("walkingstick.png"))?;
    Ok(Media {
        background,
        circles,
        circle_clips: SpriteSheet::circles(),
        stick,
        stick_clips: SpriteSheet::walking_stick(),
    })
}

fn channel_for_key(key: Key) -> Option<Channel> {
    match key {
        Key::Q => Some(Channel::Red),
        Key::W => Some(Channel::Green),
        Key::E => Some(Channel::Blue),
        Key::A => Some(Channel::Alpha),
        _ => None,
    }
}

/// Draw one frame: background, corner sprites, then the walker.
fn render(
    renderer: &mut Renderer,
    media: &mut Media,
    modulation: Modulation,
    walk: &WalkAnimation,
) {
    let (w, h) = (renderer.width() as i32, renderer.height() as i32);

    renderer.set_draw_color(Color::WHITE);
    renderer.clear();

    media.background.render(renderer, 0, 0, None);

    media.circles.set_color(modulation.r, modulation.g, modulation.b);
    media.circles.set_alpha(modulation.a);
    let clips = &media.circle_clips.clips;
    media.circles.render(renderer, 0, 0, Some(clips[0]));
    media.circles.render(renderer, w - clips[1].w, 0, Some(clips[1]));
    media.circles.render(renderer, 0, h - clips[2].h, Some(clips[2]));
    media.circles.render(renderer, w - clips[3].w, h - clips[3].h, Some(clips[3]));

    let stick = &media.stick_clips.clips;
    media.stick.render(
        renderer,
        w - walk.offset(),
        h - stick[0].h,
        Some(stick[walk.clip_index()]),
    );
}

fn main() -> Result<(), Error> {
    init_logging(LoggingConfig::for_sketch(env!("CARGO_BIN_NAME")));
    run().inspect_err(report_fatal)
}

fn run() -> Result<(), Error> {
    let config = WindowConfig::titled("Sprites");
    let mut drawer = Drawer::new(&config)?;
    let mut renderer = Renderer::new(drawer.width(), drawer.height());

    let mut media = load_media()?;

    let mut modulation = Modulation::default();
    let mut walk = WalkAnimation::new(&media.stick_clips, drawer.width() as i32);

    let mut quit = false;
    while !quit {
        for event in drawer.poll_events() {
            match event {
                Event::Quit => quit = true,
                Event::KeyDown(key) => {
                    if let Some(channel) = channel_for_key(key) {
                        modulation.bump(channel);
                        log::debug!("modulation now {modulation:?}");
                    }
                }
            }
        }

        render(&mut renderer, &mut media, modulation, &walk);
        walk.tick();

        drawer.present(renderer.frame())?;
    }

    Ok(())
}
