// Window wrapper: owns the on-screen window, turns key state into discrete
// events, and presents the software renderer's frame buffer.

use crate::config::WindowConfig;
use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// Input the sketches react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(Key),
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
}

impl Drawer {
    /// Open a fixed-size window. Presentation is paced to `target_fps`,
    /// which stands in for vsync.
    pub fn new(config: &WindowConfig) -> Result<Self, Error> {
        let options = WindowOptions::default();
        let mut window = Window::new(&config.title, config.width, config.height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(config.target_fps);
        log::info!("opened {}x{} window \"{}\"", config.width, config.height, config.title);
        Ok(Self { window, width: config.width, height: config.height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Drain pending input. Closing the window or pressing Escape yields
    /// `Event::Quit`; every other fresh key press yields `KeyDown`.
    pub fn poll_events(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter(|k| *k != Key::Escape)
            .map(Event::KeyDown)
            .collect();
        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            events.push(Event::Quit);
        }
        events
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        log::debug!("closing window");
    }
}
