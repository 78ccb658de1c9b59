use axum::{
  extract::ws::{Message, WebSocket},
  extract::{State, WebSocketUpgrade},
  http::Method,
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::env;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod game;
mod protocol;

use game::room::Room;

#[derive(Debug, Serialize)]
struct OkResponse {
  ok: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let room = Arc::new(Room::new());
  room.spawn_ticker();

  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET])
    .allow_headers(Any);

  let app: Router = Router::new()
    .route("/api/health", get(health))
    .route("/api/game", get(ws_handler))
    .layer(cors)
    .with_state(room);

  let port: u16 = env::var("PORT")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(3000);

  let address = format!("0.0.0.0:{port}");
  tracing::info!("listening on {address}");

  let listener = tokio::net::TcpListener::bind(&address).await?;
  axum::serve(listener, app).await?;

  Ok(())
}

async fn health() -> impl IntoResponse {
  Json(OkResponse { ok: true })
}

async fn ws_handler(ws: WebSocketUpgrade, State(room): State<Arc<Room>>) -> impl IntoResponse {
  ws.on_upgrade(move |socket| handle_socket(socket, room))
}

async fn handle_socket(socket: WebSocket, room: Arc<Room>) {
  let (mut sender, mut receiver) = socket.split();
  let (tx, mut rx) = mpsc::unbounded_channel::<String>();
  let session_id = room.add_session(tx).await;

  let send_task = tokio::spawn(async move {
    while let Some(payload) = rx.recv().await {
      if sender.send(Message::Text(payload)).await.is_err() {
        break;
      }
    }
  });

  while let Some(result) = receiver.next().await {
    let Ok(message) = result else { break };
    match message {
      Message::Text(text) => {
        room.handle_text_message(&session_id, &text).await;
      }
      Message::Close(_) => break,
      _ => {}
    }
  }

  room.remove_session(&session_id).await;
  send_task.abort();
}
