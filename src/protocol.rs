use crate::game::types::{Apple, Particle, PlayerSnapshot, ScoreEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
  SetName { name: String },
  PlayerMovement { angle: f64, speed: f64 },
  PlayerBoost,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
  NameSet {
    id: String,
  },
  NewPlayer {
    player: PlayerSnapshot,
  },
  CurrentPlayers {
    players: Vec<PlayerSnapshot>,
  },
  CurrentApples {
    apples: Vec<Apple>,
  },
  CurrentParticles {
    particles: Vec<Particle>,
  },
  PlayerDead {
    id: String,
    particles: Vec<Particle>,
  },
  PlayerDisconnected {
    id: String,
  },
  GameState {
    players: Vec<PlayerSnapshot>,
    apples: Vec<Apple>,
    particles: Vec<Particle>,
  },
  UpdateScores {
    scores: Vec<ScoreEntry>,
  },
}

pub fn decode_client_message(text: &str) -> Option<ClientMessage> {
  serde_json::from_str(text).ok()
}
