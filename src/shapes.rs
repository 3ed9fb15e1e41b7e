// Drawable shapes: circles, rectangles and single points.

use crate::canvas::Canvas;
use crate::types::{Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle { radius: i32 },
    Rectangle { width: i32, height: i32 },
    Point,
}

/// A positioned, coloured shape. Position and colour are mutated every frame
/// by the sketch that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub fill: bool,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn circle(x: i32, y: i32, radius: i32, color: Color, fill: bool) -> Self {
        Self { x, y, color, fill, kind: ShapeKind::Circle { radius } }
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, color: Color, fill: bool) -> Self {
        Self { x, y, color, fill, kind: ShapeKind::Rectangle { width, height } }
    }

    pub fn point(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color, fill: false, kind: ShapeKind::Point }
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn radius(&self) -> Option<i32> {
        match self.kind {
            ShapeKind::Circle { radius } => Some(radius),
            _ => None,
        }
    }

    /// Horizontal extent used by wraparound logic: radius for circles,
    /// width for rectangles, 0 for points.
    pub fn extent(&self) -> i32 {
        match self.kind {
            ShapeKind::Circle { radius } => radius,
            ShapeKind::Rectangle { width, .. } => width,
            ShapeKind::Point => 0,
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.set_draw_color(self.color);
        match self.kind {
            ShapeKind::Circle { radius } => draw_circle(canvas, self.x, self.y, radius, self.fill),
            ShapeKind::Rectangle { width, height } => {
                let rect = Rect::new(self.x, self.y, width, height);
                if self.fill {
                    canvas.fill_rect(rect);
                } else {
                    canvas.draw_rect(rect);
                }
            }
            ShapeKind::Point => canvas.draw_point(self.x, self.y),
        }
    }
}

/// Midpoint circle centred on (cx,cy). Integer-only; each step emits the
/// eight symmetric points, or four mirrored scanlines when filling.
pub fn draw_circle<C: Canvas + ?Sized>(canvas: &mut C, cx: i32, cy: i32, radius: i32, fill: bool) {
    let diameter = radius * 2;
    let mut x = radius - 1;
    let mut y = 0;
    let mut tx = 1;
    let mut ty = 1;
    let mut error = tx - diameter;

    while x >= y {
        if fill {
            canvas.draw_line(cx + x, cy + y, cx - x, cy + y);
            canvas.draw_line(cx + x, cy - y, cx - x, cy - y);
            canvas.draw_line(cx + y, cy + x, cx - y, cy + x);
            canvas.draw_line(cx + y, cy - x, cx - y, cy - x);
        } else {
            canvas.draw_point(cx + x, cy - y);
            canvas.draw_point(cx + x, cy + y);
            canvas.draw_point(cx - x, cy - y);
            canvas.draw_point(cx - x, cy + y);
            canvas.draw_point(cx + y, cy - x);
            canvas.draw_point(cx + y, cy + x);
            canvas.draw_point(cx - y, cy - x);
            canvas.draw_point(cx - y, cy + x);
        }

        if error <= 0 {
            y += 1;
            error += ty;
            ty += 2;
        }
        if error > 0 {
            x -= 1;
            tx += 2;
            error += tx - diameter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Canvas that remembers every primitive instead of rasterizing it.
    #[derive(Default)]
    struct Recorder {
        pub color: Option<Color>,
        pub points: Vec<(i32, i32)>,
        pub lines: Vec<(i32, i32, i32, i32)>,
        pub rects: Vec<(Rect, bool)>,
    }

    impl Canvas for Recorder {
        fn set_draw_color(&mut self, color: Color) { self.color = Some(color); }
        fn clear(&mut self) {}
        fn draw_point(&mut self, x: i32, y: i32) { self.points.push((x, y)); }
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
            self.lines.push((x0, y0, x1, y1));
        }
        fn draw_rect(&mut self, rect: Rect) { self.rects.push((rect, false)); }
        fn fill_rect(&mut self, rect: Rect) { self.rects.push((rect, true)); }
    }

    fn outline(radius: i32) -> HashSet<(i32, i32)> {
        let mut rec = Recorder::default();
        draw_circle(&mut rec, 0, 0, radius, false);
        rec.points.into_iter().collect()
    }

    #[test]
    fn outline_is_symmetric_under_all_reflections() {
        for r in [2, 5, 10, 37, 100] {
            let pts = outline(r);
            for &(x, y) in &pts {
                for p in [(-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                    assert!(pts.contains(&p), "r={r}: ({x},{y}) missing mirror {p:?}");
                }
            }
        }
    }

    #[test]
    fn outline_stays_inside_radius() {
        for r in [1, 3, 10, 50, 100] {
            for (x, y) in outline(r) {
                let d = ((x * x + y * y) as f64).sqrt();
                assert!(d <= r as f64 + 0.5, "r={r}: ({x},{y}) at {d}");
            }
        }
    }

    #[test]
    fn outline_has_enough_pixels() {
        for r in [5, 10, 50, 100] {
            let n = outline(r).len() as i32;
            assert!(n >= 5 * r, "r={r}: only {n} points");
            assert!(n <= 8 * r, "r={r}: {n} points");
        }
    }

    #[test]
    fn filled_circle_emits_mirrored_scanlines() {
        let mut rec = Recorder::default();
        draw_circle(&mut rec, 100, 50, 10, true);
        assert!(rec.points.is_empty());
        assert_eq!(rec.lines.len() % 4, 0);
        for &(x0, y0, x1, y1) in &rec.lines {
            assert_eq!(y0, y1);
            assert_eq!(x0 - 100, 100 - x1);
        }
        // first scanline spans the full diameter minus the rim pixel
        assert_eq!(rec.lines[0], (109, 50, 91, 50));
    }

    #[test]
    fn draw_sets_shape_color_first() {
        let mut rec = Recorder::default();
        Shape::rectangle(1, 2, 3, 4, Color::BLUE, false).draw(&mut rec);
        Shape::point(7, 8, Color::RED).draw(&mut rec);
        assert_eq!(rec.rects, vec![(Rect::new(1, 2, 3, 4), false)]);
        assert_eq!(rec.points, vec![(7, 8)]);
        assert_eq!(rec.color, Some(Color::RED));
    }

    #[test]
    fn extent_per_kind() {
        assert_eq!(Shape::circle(0, 0, 9, Color::RED, true).extent(), 9);
        assert_eq!(Shape::rectangle(0, 0, 80, 20, Color::RED, true).extent(), 80);
        assert_eq!(Shape::point(0, 0, Color::RED).radius(), None);
    }
}
