use super::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use super::types::Point;
use rand::Rng;

pub fn distance(a: Point, b: Point) -> f64 {
  ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn within(a: Point, b: Point, threshold: f64) -> bool {
  distance(a, b) < threshold
}

pub fn random_arena_point(rng: &mut impl Rng) -> Point {
  Point {
    x: rng.gen::<f64>() * ARENA_WIDTH,
    y: rng.gen::<f64>() * ARENA_HEIGHT,
  }
}
