use super::constants::{
  APPLE_PICKUP_DISTANCE, APPLE_REWARD, LETHAL_DISTANCE, PARTICLE_PICKUP_DISTANCE, PARTICLE_REWARD,
};
use super::geometry::within;
use super::types::{Particle, Player, Point, TrailSnapshot};
use super::world::ApplePool;
use rand::Rng;

pub fn collect_apples(player: &mut Player, apples: &mut ApplePool, rng: &mut impl Rng) -> usize {
  let Some(head) = player.trail.front().copied() else { return 0 };
  let mut collected = 0;
  for index in 0..apples.len() {
    let Some(apple) = apples.get(index) else { continue };
    let pos = Point {
      x: apple.x,
      y: apple.y,
    };
    if !within(head, pos, APPLE_PICKUP_DISTANCE) {
      continue;
    }
    let fresh = apples.spawn(rng);
    apples.replace(index, fresh);
    player.target_len += 1;
    player.score += APPLE_REWARD;
    collected += 1;
  }
  collected
}

pub fn collect_particles(player: &mut Player, particles: &mut Vec<Particle>) -> usize {
  let Some(head) = player.trail.front().copied() else { return 0 };
  let before = particles.len();
  particles.retain(|particle| {
    let pos = Point {
      x: particle.x,
      y: particle.y,
    };
    !within(head, pos, PARTICLE_PICKUP_DISTANCE)
  });
  let collected = before - particles.len();
  player.target_len += collected;
  player.score += collected as i64 * PARTICLE_REWARD;
  collected
}

pub fn find_lethal_contact<'a>(head: Point, others: &'a [TrailSnapshot]) -> Option<&'a str> {
  for other in others {
    if other
      .trail
      .iter()
      .any(|segment| within(head, *segment, LETHAL_DISTANCE))
    {
      return Some(other.id.as_str());
    }
  }
  None
}
