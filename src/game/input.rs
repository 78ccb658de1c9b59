use super::constants::MAX_INPUT_SPEED;

pub const MAX_PLAYER_NAME_LEN: usize = 20;

pub fn parse_movement(angle: f64, speed: f64) -> Option<(f64, f64)> {
  if !angle.is_finite() || !speed.is_finite() {
    return None;
  }
  Some((angle, speed.clamp(0.0, MAX_INPUT_SPEED)))
}

pub fn sanitize_player_name(name: &str) -> Option<String> {
  let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
  if cleaned.is_empty() {
    return None;
  }
  Some(cleaned.chars().take(MAX_PLAYER_NAME_LEN).collect())
}
