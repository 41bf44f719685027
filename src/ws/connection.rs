//! WebSocket listener loop.
//!
//! Forwards every broadcast frame to a single connection. Listeners are
//! receive-only; anything they send is ignored.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::{Broadcaster, Frame};

/// Runs the read/write loop for a single WebSocket listener.
///
/// - Forwards each [`Frame`] from the receiver as a text message.
/// - Stops on a close frame, end of stream, read or write error.
pub async fn run_connection(
    socket: WebSocket,
    mut frames: broadcast::Receiver<Frame>,
    broadcaster: Broadcaster,
) {
    let connection_id = Uuid::new_v4();
    tracing::info!(
        %connection_id,
        listeners = broadcaster.listener_count(),
        "listener connected"
    );

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%connection_id, error = %err, "ws read failed");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            frame = frames.recv() => {
                match frame {
                    Ok(frame) => {
                        if ws_tx.send(Message::text(String::from(&*frame))).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(
                            %connection_id,
                            lagged = n,
                            "listener lagged behind broadcaster"
                        );
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    let _ = ws_tx.close().await;
    drop(frames);
    tracing::info!(
        %connection_id,
        listeners = broadcaster.listener_count(),
        "listener disconnected"
    );
}
