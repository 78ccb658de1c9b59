use super::types::Point;
use std::collections::VecDeque;

pub fn advance(trail: &mut VecDeque<Point>, heading: f64, speed: f64, target_len: usize) {
  let Some(head) = trail.front().copied() else { return };
  let next = Point {
    x: head.x + heading.cos() * speed,
    y: head.y + heading.sin() * speed,
  };
  trail.push_front(next);
  if trail.len() > target_len {
    trail.pop_back();
  }
}
