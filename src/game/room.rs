use super::collision::{collect_apples, collect_particles, find_lethal_contact};
use super::constants::{BOOST_RESET_MS, TICK_MICROS};
use super::input::{parse_movement, sanitize_player_name};
use super::trail;
use super::types::{PlayerPhase, PlayerSnapshot};
use super::world::World;
use crate::protocol::{decode_client_message, ClientMessage, ServerMessage};
use rand::Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

#[derive(Debug)]
pub struct Room {
  state: Mutex<RoomState>,
  running: AtomicBool,
}

#[derive(Debug)]
struct RoomState {
  sessions: HashMap<String, UnboundedSender<String>>,
  world: World,
}

impl Room {
  pub fn new() -> Self {
    let mut rng = rand::thread_rng();
    Self {
      state: Mutex::new(RoomState {
        sessions: HashMap::new(),
        world: World::new(&mut rng),
      }),
      running: AtomicBool::new(false),
    }
  }

  pub async fn add_session(&self, sender: UnboundedSender<String>) -> String {
    let session_id = Uuid::new_v4().to_string();
    let mut state = self.state.lock().await;
    state.handle_connect(&session_id, sender);
    session_id
  }

  pub async fn remove_session(&self, session_id: &str) {
    let mut state = self.state.lock().await;
    state.handle_disconnect(session_id);
  }

  pub async fn handle_text_message(self: &Arc<Self>, session_id: &str, text: &str) {
    let Some(message) = decode_client_message(text) else { return };
    self.handle_client_message(session_id, message).await;
  }

  async fn handle_client_message(self: &Arc<Self>, session_id: &str, message: ClientMessage) {
    let mut state = self.state.lock().await;
    match message {
      ClientMessage::SetName { name } => state.handle_set_name(session_id, &name),
      ClientMessage::PlayerMovement { angle, speed } => {
        state.handle_movement(session_id, angle, speed);
      }
      ClientMessage::PlayerBoost => {
        let Some(seq) = state.handle_boost(session_id) else { return };
        drop(state);
        self.schedule_boost_reset(session_id.to_string(), seq);
      }
    }
  }

  fn schedule_boost_reset(self: &Arc<Self>, player_id: String, seq: u64) {
    let room = Arc::clone(self);
    tokio::spawn(async move {
      tokio::time::sleep(Duration::from_millis(BOOST_RESET_MS)).await;
      let mut state = room.state.lock().await;
      state.apply_boost_reset(&player_id, seq);
    });
  }

  pub fn spawn_ticker(self: &Arc<Self>) {
    if self
      .running
      .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
      .is_err()
    {
      return;
    }

    let room = Arc::clone(self);
    tokio::spawn(async move {
      let mut interval = tokio::time::interval(Duration::from_micros(TICK_MICROS));
      interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
      loop {
        interval.tick().await;
        let mut state = room.state.lock().await;
        state.tick();
      }
    });
  }
}

impl RoomState {
  fn handle_connect(&mut self, session_id: &str, sender: UnboundedSender<String>) {
    self.sessions.insert(session_id.to_string(), sender);
    let mut rng = rand::thread_rng();
    self.world.spawn_player(session_id, &mut rng);
    tracing::debug!(session_id, "session connected");

    let players = self.world.player_snapshots();
    self.send_to(session_id, &ServerMessage::CurrentPlayers { players });
    let apples = self.world.apple_snapshots();
    self.send_to(session_id, &ServerMessage::CurrentApples { apples });
    let particles = self.world.particles.clone();
    self.send_to(session_id, &ServerMessage::CurrentParticles { particles });
  }

  fn handle_set_name(&mut self, session_id: &str, raw_name: &str) {
    let Some(name) = sanitize_player_name(raw_name) else { return };
    let Some(player) = self.world.player_mut(session_id) else { return };
    if player.is_active() {
      return;
    }
    player.phase = PlayerPhase::Active { name };
    tracing::debug!(player_id = session_id, "player entered the arena");

    self.send_to(
      session_id,
      &ServerMessage::NameSet {
        id: session_id.to_string(),
      },
    );
    let Some(snapshot) = self.world.player(session_id).and_then(PlayerSnapshot::of) else {
      return;
    };
    self.broadcast(&ServerMessage::NewPlayer { player: snapshot });
    let players = self.world.player_snapshots();
    self.broadcast(&ServerMessage::CurrentPlayers { players });
    self.broadcast_scores();
  }

  fn handle_movement(&mut self, session_id: &str, angle: f64, speed: f64) {
    let Some((angle, speed)) = parse_movement(angle, speed) else { return };
    let Some(player) = self.world.player_mut(session_id) else { return };
    if !player.is_active() {
      return;
    }
    player.heading = angle;
    player.speed = speed;
  }

  fn handle_boost(&mut self, session_id: &str) -> Option<u64> {
    let player = self.world.player_mut(session_id)?;
    if !player.is_active() {
      return None;
    }
    player.boost = true;
    player.boost_seq += 1;
    Some(player.boost_seq)
  }

  fn apply_boost_reset(&mut self, player_id: &str, seq: u64) {
    let Some(player) = self.world.player_mut(player_id) else { return };
    if player.boost_seq != seq {
      return;
    }
    player.boost = false;
  }

  fn handle_disconnect(&mut self, session_id: &str) {
    if self.sessions.remove(session_id).is_none() {
      return;
    }
    let Some(player) = self.world.remove_player(session_id) else { return };
    if !player.is_active() {
      return;
    }
    tracing::debug!(player_id = session_id, score = player.score, "player disconnected");
    self.broadcast(&ServerMessage::PlayerDisconnected {
      id: session_id.to_string(),
    });
    self.broadcast_scores();
  }

  fn tick(&mut self) {
    let mut rng = rand::thread_rng();
    let mut pending: Vec<ServerMessage> = Vec::new();

    for id in self.world.active_ids_sorted() {
      {
        let world = &mut self.world;
        let Some(player) = world.players.get_mut(&id) else { continue };
        trail::advance(
          &mut player.trail,
          player.heading,
          player.speed,
          player.target_len,
        );
        collect_apples(player, &mut world.apples, &mut rng);
        collect_particles(player, &mut world.particles);
      }

      let Some(head) = self
        .world
        .player(&id)
        .and_then(|player| player.trail.front().copied())
      else {
        continue;
      };
      let others = self.world.contact_snapshots(&id);
      if find_lethal_contact(head, &others).is_some() {
        self.kill_player(&id, &mut pending, &mut rng);
      }
    }

    self.world.decay_particles();

    let state_message = ServerMessage::GameState {
      players: self.world.player_snapshots(),
      apples: self.world.apple_snapshots(),
      particles: self.world.particles.clone(),
    };
    self.broadcast(&state_message);
    for message in pending {
      self.broadcast(&message);
    }
    self.broadcast_scores();
  }

  fn kill_player(&mut self, player_id: &str, pending: &mut Vec<ServerMessage>, rng: &mut impl Rng) {
    let Some(player) = self.world.remove_player(player_id) else { return };
    tracing::debug!(player_id, score = player.score, "player crashed");
    let burst = self.world.spawn_death_burst(&player.trail, &player.color, rng);
    pending.push(ServerMessage::PlayerDead {
      id: player_id.to_string(),
      particles: burst,
    });
    pending.push(ServerMessage::PlayerDisconnected {
      id: player_id.to_string(),
    });
  }

  fn broadcast_scores(&mut self) {
    let scores = self.world.score_entries();
    self.broadcast(&ServerMessage::UpdateScores { scores });
  }

  fn broadcast(&mut self, message: &ServerMessage) {
    let Ok(payload) = serde_json::to_string(message) else { return };
    let mut stale = Vec::new();
    for (session_id, sender) in &self.sessions {
      if sender.send(payload.clone()).is_err() {
        stale.push(session_id.clone());
      }
    }
    for session_id in stale {
      self.handle_disconnect(&session_id);
    }
  }

  fn send_to(&self, session_id: &str, message: &ServerMessage) {
    let Some(sender) = self.sessions.get(session_id) else { return };
    let Ok(payload) = serde_json::to_string(message) else { return };
    let _ = sender.send(payload);
  }
}
