use super::constants::{
  APPLE_COUNT, BURST_JITTER, BURST_PER_SEGMENT, COLOR_POOL, PARTICLE_LIFESPAN_TICKS,
  STARTING_SPEED, STARTING_TARGET_LEN,
};
use super::geometry::random_arena_point;
use super::types::{Apple, Particle, Player, PlayerPhase, PlayerSnapshot, Point, ScoreEntry, TrailSnapshot};
use rand::Rng;
use std::collections::{HashMap, VecDeque};

#[derive(Debug)]
pub struct ApplePool {
  apples: Vec<Apple>,
  next_id: u32,
}

impl ApplePool {
  pub fn new(count: usize, rng: &mut impl Rng) -> Self {
    let mut pool = Self {
      apples: Vec::with_capacity(count),
      next_id: 0,
    };
    for _ in 0..count {
      let apple = pool.spawn(rng);
      pool.apples.push(apple);
    }
    pool
  }

  pub fn spawn(&mut self, rng: &mut impl Rng) -> Apple {
    let id = self.next_id;
    self.next_id = self.next_id.wrapping_add(1);
    let pos = random_arena_point(rng);
    Apple {
      id,
      x: pos.x,
      y: pos.y,
    }
  }

  pub fn replace(&mut self, index: usize, apple: Apple) {
    if let Some(slot) = self.apples.get_mut(index) {
      *slot = apple;
    }
  }

  pub fn get(&self, index: usize) -> Option<&Apple> {
    self.apples.get(index)
  }

  pub fn len(&self) -> usize {
    self.apples.len()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Apple> {
    self.apples.iter()
  }
}

#[derive(Debug)]
pub struct World {
  pub players: HashMap<String, Player>,
  pub apples: ApplePool,
  pub particles: Vec<Particle>,
}

impl World {
  pub fn new(rng: &mut impl Rng) -> Self {
    Self {
      players: HashMap::new(),
      apples: ApplePool::new(APPLE_COUNT, rng),
      particles: Vec::new(),
    }
  }

  pub fn spawn_player(&mut self, id: &str, rng: &mut impl Rng) {
    let spawn = random_arena_point(rng);
    let color = COLOR_POOL[rng.gen_range(0..COLOR_POOL.len())].to_string();
    let player = Player {
      id: id.to_string(),
      phase: PlayerPhase::Lobby,
      color,
      heading: 0.0,
      speed: STARTING_SPEED,
      target_len: STARTING_TARGET_LEN,
      score: 0,
      boost: false,
      boost_seq: 0,
      trail: VecDeque::from([spawn]),
    };
    self.players.insert(player.id.clone(), player);
  }

  pub fn player(&self, id: &str) -> Option<&Player> {
    self.players.get(id)
  }

  pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
    self.players.get_mut(id)
  }

  pub fn remove_player(&mut self, id: &str) -> Option<Player> {
    self.players.remove(id)
  }

  pub fn active_ids_sorted(&self) -> Vec<String> {
    let mut ids: Vec<String> = self
      .players
      .values()
      .filter(|player| player.is_active())
      .map(|player| player.id.clone())
      .collect();
    ids.sort();
    ids
  }

  pub fn contact_snapshots(&self, skip_id: &str) -> Vec<TrailSnapshot> {
    let mut snapshots: Vec<TrailSnapshot> = self
      .players
      .values()
      .filter(|player| player.is_active() && player.id != skip_id)
      .map(|player| TrailSnapshot {
        id: player.id.clone(),
        trail: player.trail.iter().copied().collect(),
      })
      .collect();
    snapshots.sort_by(|a, b| a.id.cmp(&b.id));
    snapshots
  }

  pub fn spawn_death_burst(
    &mut self,
    trail: &VecDeque<Point>,
    color: &str,
    rng: &mut impl Rng,
  ) -> Vec<Particle> {
    let mut burst = Vec::with_capacity(trail.len() * BURST_PER_SEGMENT);
    for segment in trail {
      for _ in 0..BURST_PER_SEGMENT {
        burst.push(Particle {
          x: segment.x + rng.gen_range(-BURST_JITTER..=BURST_JITTER),
          y: segment.y + rng.gen_range(-BURST_JITTER..=BURST_JITTER),
          color: color.to_string(),
          lifespan: PARTICLE_LIFESPAN_TICKS,
        });
      }
    }
    self.particles.extend(burst.iter().cloned());
    burst
  }

  pub fn decay_particles(&mut self) {
    for particle in &mut self.particles {
      particle.lifespan -= 1;
    }
    self.particles.retain(|particle| particle.lifespan > 0);
  }

  pub fn player_snapshots(&self) -> Vec<PlayerSnapshot> {
    self.players.values().filter_map(PlayerSnapshot::of).collect()
  }

  pub fn apple_snapshots(&self) -> Vec<Apple> {
    self.apples.iter().cloned().collect()
  }

  pub fn score_entries(&self) -> Vec<ScoreEntry> {
    self
      .players
      .values()
      .filter_map(|player| {
        let name = player.name()?.to_string();
        Some(ScoreEntry {
          id: player.id.clone(),
          name,
          score: player.score,
        })
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::constants::{ARENA_HEIGHT, ARENA_WIDTH};

  fn make_world() -> World {
    let mut rng = rand::thread_rng();
    World::new(&mut rng)
  }

  #[test]
  fn apple_pool_seeds_full_count_within_bounds() {
    let world = make_world();
    assert_eq!(world.apples.len(), APPLE_COUNT);
    for apple in world.apples.iter() {
      assert!(apple.x >= 0.0 && apple.x < ARENA_WIDTH);
      assert!(apple.y >= 0.0 && apple.y < ARENA_HEIGHT);
    }
  }

  #[test]
  fn apple_ids_unique_among_live_apples() {
    let world = make_world();
    let mut ids: Vec<u32> = world.apples.iter().map(|apple| apple.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), APPLE_COUNT);
  }

  #[test]
  fn replace_swaps_one_slot_and_keeps_pool_size() {
    let mut world = make_world();
    let old_id = world.apples.get(7).expect("slot").id;
    let fresh = {
      let mut rng = rand::thread_rng();
      world.apples.spawn(&mut rng)
    };
    let fresh_id = fresh.id;
    world.apples.replace(7, fresh);
    assert_eq!(world.apples.len(), APPLE_COUNT);
    let slot = world.apples.get(7).expect("slot");
    assert_eq!(slot.id, fresh_id);
    assert_ne!(slot.id, old_id);
  }

  #[test]
  fn spawned_player_starts_in_lobby_with_one_trail_point() {
    let mut world = make_world();
    let mut rng = rand::thread_rng();
    world.spawn_player("p-1", &mut rng);
    let player = world.player("p-1").expect("player");
    assert!(!player.is_active());
    assert_eq!(player.trail.len(), 1);
    assert_eq!(player.target_len, STARTING_TARGET_LEN);
    assert_eq!(player.score, 0);
    assert!(COLOR_POOL.contains(&player.color.as_str()));
  }

  #[test]
  fn death_burst_scatters_two_jittered_particles_per_segment() {
    let mut world = make_world();
    let mut rng = rand::thread_rng();
    let trail: VecDeque<Point> = [(100.0, 100.0), (98.0, 100.0), (96.0, 100.0)]
      .iter()
      .map(|(x, y)| Point { x: *x, y: *y })
      .collect();

    let burst = world.spawn_death_burst(&trail, "#ff6b6b", &mut rng);

    assert_eq!(burst.len(), trail.len() * BURST_PER_SEGMENT);
    assert_eq!(world.particles.len(), burst.len());
    for (index, particle) in burst.iter().enumerate() {
      let segment = trail[index / BURST_PER_SEGMENT];
      assert!((particle.x - segment.x).abs() <= BURST_JITTER);
      assert!((particle.y - segment.y).abs() <= BURST_JITTER);
      assert_eq!(particle.color, "#ff6b6b");
      assert_eq!(particle.lifespan, PARTICLE_LIFESPAN_TICKS);
    }
  }

  #[test]
  fn decay_decrements_and_prunes_expired_particles() {
    let mut world = make_world();
    world.particles.push(Particle {
      x: 10.0,
      y: 10.0,
      color: "#ffd166".to_string(),
      lifespan: 1,
    });
    world.particles.push(Particle {
      x: 20.0,
      y: 20.0,
      color: "#ffd166".to_string(),
      lifespan: 3,
    });

    world.decay_particles();

    assert_eq!(world.particles.len(), 1);
    assert_eq!(world.particles[0].lifespan, 2);
  }

  #[test]
  fn contact_snapshots_sorted_ascending_without_self_or_lobby() {
    let mut world = make_world();
    let mut rng = rand::thread_rng();
    for id in ["c", "a", "b", "idle"] {
      world.spawn_player(id, &mut rng);
    }
    for id in ["c", "a", "b"] {
      world.player_mut(id).expect("player").phase = PlayerPhase::Active {
        name: id.to_uppercase(),
      };
    }

    let snapshots = world.contact_snapshots("b");
    let ids: Vec<&str> = snapshots.iter().map(|snapshot| snapshot.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
  }
}
