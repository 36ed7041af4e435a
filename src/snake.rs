use std::collections::{vec_deque, VecDeque};

use crate::geometry::Point;

/// The snake's body, head first. Never empty.
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Snake { body }
    }

    /// Builds a snake from segments listed head first.
    #[cfg(test)]
    pub fn from_segments(segments: &[Point]) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Snake { body: segments.iter().copied().collect() }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: &Point) -> bool {
        self.body.contains(pos)
    }

    pub fn segments(&self) -> vec_deque::Iter<'_, Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
    }

    /// Removes the last segment, unless it is also the head.
    pub fn drop_tail(&mut self) -> Option<Point> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_drop_keeps_length() {
        let mut snake = Snake::from_segments(&[Point::new(3, 3), Point::new(2, 3)]);
        snake.push_head(Point::new(4, 3));
        assert_eq!(snake.drop_tail(), Some(Point::new(2, 3)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(4, 3));
        assert!(!snake.contains(&Point::new(2, 3)));
    }

    #[test]
    fn head_is_never_dropped() {
        let mut snake = Snake::new(Point::new(0, 0));
        assert_eq!(snake.drop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn segments_are_head_first() {
        let snake = Snake::from_segments(&[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]);
        let xs: Vec<i32> = snake.segments().map(|p| p.x).collect();
        assert_eq!(xs, vec![5, 4, 3]);
    }
}
