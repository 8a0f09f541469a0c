use std::collections::VecDeque;

use crate::{Color, Point, Surface};

const SNAKE_WIDTH: f64 = 8.0;
const SNAKE_GLOW: f64 = 20.0;
const HEAD_RADIUS: f64 = 10.0;
const EYE_RADIUS: f64 = 2.0;
const EYE_OFFSET: f64 = 3.0;

/// A trail of fixed length whose head chases a target.
///
/// Segments never decay; each step pushes a new head and drops the tail once the trail is
/// longer than its length. A mirrored snake chases the horizontal reflection of the target.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Point>,
    length: usize,
    mirrored: bool,
}

impl Snake {
    /// Coils a [`Snake`] of `length` segments (at least one) on `start`.
    pub fn new(start: Point, length: usize, mirrored: bool) -> Snake {
        let length = length.max(1);

        Snake {
            segments: std::iter::repeat(start).take(length).collect(),
            length,
            mirrored,
        }
    }

    /// Moves the head to `target` on a surface `width` pixels wide.
    pub fn follow(&mut self, target: Point, width: f64) {
        let head = if self.mirrored {
            target.mirror(width)
        } else {
            target
        };

        self.segments.push_front(head);
        self.segments.truncate(self.length);
    }

    pub fn head(&self) -> Point {
        self.segments[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Draws the body with a glow pass, then the head and its eyes. The direct snake wears
    /// `accent`; the mirrored one is silver.
    pub fn draw<S: Surface>(&self, surface: &S, accent: &Color) -> Result<(), S::Error> {
        let (body, glow, head) = if self.mirrored {
            (
                Color::Rgba(192, 192, 192, 0.8),
                Color::Rgba(192, 192, 192, 0.6),
                Color::Css("#c0c0c0".to_string()),
            )
        } else {
            (accent.clone(), accent.clone(), accent.clone())
        };

        surface.set_stroke(&body, SNAKE_WIDTH);
        surface.stroke_polyline(self.segments.iter())?;

        surface.set_shadow(SNAKE_GLOW, &glow);
        surface.stroke_polyline(self.segments.iter())?;
        surface.set_shadow(0.0, &glow);

        let Point(x, y) = self.head();

        surface.set_fill(&head);
        surface.fill_circle(Point(x, y), HEAD_RADIUS)?;

        surface.set_fill(&Color::Css("#000".to_string()));
        surface.fill_circle(Point(x - EYE_OFFSET, y - EYE_OFFSET), EYE_RADIUS)?;
        surface.fill_circle(Point(x + EYE_OFFSET, y - EYE_OFFSET), EYE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recorder::{Op, Recorder};

    #[test]
    fn length_never_exceeds_capacity() {
        let mut snake = Snake::new(Point(400.0, 300.0), 30, false);
        assert_eq!(snake.len(), 30);

        for i in 0..100 {
            snake.follow(Point(i as f64, i as f64 * 2.0), 800.0);
            assert_eq!(snake.len(), 30);
            assert_eq!(snake.head(), Point(i as f64, i as f64 * 2.0));
        }
    }

    #[test]
    fn mirrored_head_reflects_target() {
        let mut snake = Snake::new(Point(400.0, 300.0), 30, true);

        snake.follow(Point(120.0, 75.0), 800.0);

        assert_eq!(snake.head(), Point(680.0, 75.0));
    }

    #[test]
    fn newest_segment_first() {
        let mut snake = Snake::new(Point(0.0, 0.0), 3, false);

        snake.follow(Point(1.0, 0.0), 10.0);
        snake.follow(Point(2.0, 0.0), 10.0);

        let segments: Vec<Point> = snake.segments().copied().collect();
        assert_eq!(segments, vec![Point(2.0, 0.0), Point(1.0, 0.0), Point(0.0, 0.0)]);
    }

    #[test]
    fn idle_target_bunches_segments() {
        let mut snake = Snake::new(Point(0.0, 0.0), 5, false);

        for _ in 0..5 {
            snake.follow(Point(9.0, 9.0), 10.0);
        }

        assert!(snake.segments().all(|segment| *segment == Point(9.0, 9.0)));
    }

    #[test]
    fn draws_body_twice_then_head() {
        let snake = Snake::new(Point(5.0, 5.0), 30, false);
        let recorder = Recorder::default();

        snake.draw(&recorder, &Color::default()).unwrap();

        assert_eq!(recorder.count(|op| *op == Op::Polyline(30)), 2);
        assert_eq!(recorder.count(|op| matches!(op, Op::FillCircle(_, _))), 3);
        assert!(recorder.ops.borrow().contains(&Op::FillCircle(Point(5.0, 5.0), 10.0)));
    }
}
