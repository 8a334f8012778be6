use crate::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use podium_core::{ClientEvent, ConnId};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Room-signaling endpoint. The relay assigns the connection id on accept.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let conn_id = ConnId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, conn_id, state))
}

async fn handle_socket(socket: WebSocket, conn_id: ConnId, state: AppState) {
    info!("New WebSocket connection: {}", conn_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.relay.add_conn(conn_id.clone(), tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = state.relay.clone();
        let conn_id = conn_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => relay.handle_event(&conn_id, event),
                        Err(e) => warn!("Dropping malformed message from {}: {}", conn_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Runs on every exit path, voluntary close and transport error alike.
    state.relay.disconnect(&conn_id);
    info!("WebSocket disconnected: {}", conn_id);
}
