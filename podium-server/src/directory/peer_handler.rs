use crate::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use podium_core::{PeerClientMsg, PeerId, PeerServerMsg};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Peer-directory endpoint with a client-chosen id.
pub async fn peer_ws_handler(
    ws: WebSocketUpgrade,
    Path(peer_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let peer_id = PeerId::from(peer_id);

    ws.on_upgrade(move |socket| handle_peer_socket(socket, peer_id, state))
}

/// Peer-directory endpoint without an id in the path; the server issues one.
pub async fn peer_ws_handler_anon(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let peer_id = PeerId::generate();

    ws.on_upgrade(move |socket| handle_peer_socket(socket, peer_id, state))
}

async fn handle_peer_socket(socket: WebSocket, peer_id: PeerId, state: AppState) {
    info!("New peer connection: {}", peer_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    if let Err(e) = state.directory.register(peer_id.clone(), tx.clone()) {
        warn!("Rejecting peer registration: {}", e);
        let reject = PeerServerMsg::Error {
            message: e.to_string(),
        };
        if let Ok(json) = serde_json::to_string(&reject) {
            let _ = sender.send(Message::Text(json.into())).await;
        }
        let _ = sender.close().await;
        return;
    }

    state.directory.send(
        &peer_id,
        &PeerServerMsg::Open {
            peer_id: peer_id.clone(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let directory = state.directory.clone();
        let peer_id = peer_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<PeerClientMsg>(&text) {
                        Ok(PeerClientMsg::Connect { to, payload }) => {
                            directory.send(
                                &to,
                                &PeerServerMsg::Connect {
                                    from: peer_id.clone(),
                                    payload,
                                },
                            );
                        }
                        Ok(PeerClientMsg::Call { to, payload }) => {
                            directory.send(
                                &to,
                                &PeerServerMsg::Call {
                                    from: peer_id.clone(),
                                    payload,
                                },
                            );
                        }
                        Err(e) => warn!("Dropping malformed message from peer {}: {}", peer_id, e),
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

    state.directory.unregister(&peer_id, &tx);
    info!("Peer disconnected: {}", peer_id);
}
