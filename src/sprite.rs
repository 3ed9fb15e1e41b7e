// Sprite sheets as explicit clip tables, and the stick-figure walk cycle.

use crate::types::Rect;

/// Sub-rectangles of one sprite sheet, in frame order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    pub clips: Vec<Rect>,
}

impl SpriteSheet {
    /// `count` clips of `w` x `h` laid out left to right, wrapping into new
    /// rows after `columns`.
    pub fn grid(w: i32, h: i32, columns: usize, count: usize) -> Self {
        let clips = (0..count)
            .map(|i| {
                let (col, row) = ((i % columns) as i32, (i / columns) as i32);
                Rect::new(col * w, row * h, w, h)
            })
            .collect();
        Self { clips }
    }

    /// The 2x2 sheet of 100px circles.
    pub fn circles() -> Self {
        Self::grid(100, 100, 2, 4)
    }

    /// Four 64x205 stick-figure frames in a single row.
    pub fn walking_stick() -> Self {
        Self::grid(64, 205, 4, 4)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Ticks per animation frame and per horizontal move.
pub const FRAME_DENOM: usize = 17;

/// Walk cycle: the clip changes every `FRAME_DENOM` ticks and the figure
/// steps left by one clip width at the same rate, wrapping past the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkAnimation {
    frame: usize,
    ticks: usize,
    anim_x: i32,
    frames: usize,
    step: i32,
    wrap_at: i32,
}

impl WalkAnimation {
    pub fn new(sheet: &SpriteSheet, screen_width: i32) -> Self {
        let step = sheet.clips.first().map_or(0, |c| c.w);
        Self {
            frame: 0,
            ticks: 0,
            anim_x: 0,
            frames: sheet.len(),
            step,
            wrap_at: screen_width + 2 * step,
        }
    }

    /// Index of the clip to draw this tick.
    pub fn clip_index(&self) -> usize {
        self.frame / FRAME_DENOM
    }

    /// Distance walked from the right edge.
    pub fn offset(&self) -> i32 {
        self.anim_x
    }

    pub fn tick(&mut self) {
        self.frame += 1;
        self.ticks += 1;
        if self.frame / FRAME_DENOM >= self.frames {
            self.frame = 0;
        }
        if self.ticks == FRAME_DENOM {
            self.anim_x += self.step;
            if self.anim_x >= self.wrap_at {
                self.anim_x = 0;
            }
            self.ticks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_clips_are_the_four_quadrants() {
        let sheet = SpriteSheet::circles();
        assert_eq!(
            sheet.clips,
            vec![
                Rect::new(0, 0, 100, 100),
                Rect::new(100, 0, 100, 100),
                Rect::new(0, 100, 100, 100),
                Rect::new(100, 100, 100, 100),
            ]
        );
    }

    #[test]
    fn stick_clips_run_along_one_row() {
        let sheet = SpriteSheet::walking_stick();
        let xs: Vec<i32> = sheet.clips.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0, 64, 128, 192]);
        assert!(sheet.clips.iter().all(|c| c.y == 0 && c.h == 205));
    }

    #[test]
    fn clip_advances_every_frame_denom_ticks_and_cycles() {
        let mut anim = WalkAnimation::new(&SpriteSheet::walking_stick(), 640);
        let mut seen = Vec::new();
        for _ in 0..(FRAME_DENOM * 5) {
            seen.push(anim.clip_index());
            anim.tick();
        }
        assert_eq!(seen[0], 0);
        assert_eq!(seen[FRAME_DENOM], 1);
        assert_eq!(seen[FRAME_DENOM * 3], 3);
        assert_eq!(seen[FRAME_DENOM * 4], 0);
        assert!(seen.iter().all(|i| *i < 4));
    }

    #[test]
    fn figure_moves_one_clip_width_and_wraps() {
        let mut anim = WalkAnimation::new(&SpriteSheet::walking_stick(), 640);
        for _ in 0..FRAME_DENOM {
            anim.tick();
        }
        assert_eq!(anim.offset(), 64);

        // 640 + 2*64 = 768 = 12 moves
        for _ in 0..FRAME_DENOM * 11 {
            anim.tick();
        }
        assert_eq!(anim.offset(), 0);
    }
}
