use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone)]
pub enum PlayerPhase {
  Lobby,
  Active { name: String },
}

#[derive(Debug, Clone)]
pub struct Player {
  pub id: String,
  pub phase: PlayerPhase,
  pub color: String,
  pub heading: f64,
  pub speed: f64,
  pub target_len: usize,
  pub score: i64,
  pub boost: bool,
  pub boost_seq: u64,
  pub trail: VecDeque<Point>,
}

impl Player {
  pub fn is_active(&self) -> bool {
    matches!(self.phase, PlayerPhase::Active { .. })
  }

  pub fn name(&self) -> Option<&str> {
    match &self.phase {
      PlayerPhase::Lobby => None,
      PlayerPhase::Active { name } => Some(name),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Apple {
  pub id: u32,
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Particle {
  pub x: f64,
  pub y: f64,
  pub color: String,
  pub lifespan: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
  pub id: String,
  pub name: String,
  pub color: String,
  pub score: i64,
  pub boost: bool,
  pub trail: Vec<Point>,
}

impl PlayerSnapshot {
  pub fn of(player: &Player) -> Option<Self> {
    let name = player.name()?.to_string();
    Some(Self {
      id: player.id.clone(),
      name,
      color: player.color.clone(),
      score: player.score,
      boost: player.boost,
      trail: player.trail.iter().copied().collect(),
    })
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
  pub id: String,
  pub name: String,
  pub score: i64,
}

#[derive(Debug, Clone)]
pub struct TrailSnapshot {
  pub id: String,
  pub trail: Vec<Point>,
}
