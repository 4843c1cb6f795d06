//! Websocket handle feeding push messages to a component

use super::error::RealtimeError;
use super::message::PushMessage;
use super::primus::{self, Frame};
use futures::channel::oneshot;
use futures::future::{self, Either};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{Message, futures::WebSocket};
use url::Url;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

const NORMAL_CLOSURE: u16 = 1000;

/// An open push connection.
///
/// The socket lives exactly as long as this handle: `close()` or dropping it
/// shuts the socket with a normal closure code.
pub struct LiveConnection {
    close_tx: Option<oneshot::Sender<()>>,
}

impl LiveConnection {
    /// Connect to `url` and emit every decoded message on `on_message`
    pub fn open(url: &Url, on_message: Callback<PushMessage>) -> Result<Self, RealtimeError> {
        let socket =
            WebSocket::open(url.as_str()).map_err(|err| RealtimeError::Connect(err.to_string()))?;
        let (close_tx, close_rx) = oneshot::channel();

        spawn_local(pump(socket, close_rx, on_message));
        tracing::info!(%url, "push connection opened");

        Ok(Self {
            close_tx: Some(close_tx),
        })
    }

    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(close_tx) = self.close_tx.take() {
            // The pump may already have stopped on its own
            let _ = close_tx.send(());
        }
    }
}

impl Drop for LiveConnection {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn pump(
    socket: WebSocket,
    mut close_rx: oneshot::Receiver<()>,
    on_message: Callback<PushMessage>,
) {
    let (mut sink, mut stream) = socket.split();

    loop {
        let message = match future::select(&mut close_rx, stream.next()).await {
            Either::Left(_) => break,
            Either::Right((None, _)) => {
                tracing::info!("push server ended the connection");
                return;
            }
            Either::Right((Some(Err(err)), _)) => {
                let err = RealtimeError::Transport(err.to_string());
                tracing::warn!(error = %err, "push connection lost");
                return;
            }
            Either::Right((Some(Ok(message)), _)) => message,
        };

        let text = match message {
            Message::Text(text) => text,
            Message::Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    tracing::debug!("skipping non-UTF-8 binary frame");
                    continue;
                }
            },
        };

        match primus::decode_frame(&text) {
            Ok(Frame::Message(message)) => on_message.emit(message),
            Ok(Frame::Ping(timestamp)) => {
                if let Err(err) = sink.send(Message::Text(primus::pong(&timestamp))).await {
                    tracing::warn!(error = %err, "failed to answer heartbeat");
                    return;
                }
            }
            Ok(Frame::ServerClose) => {
                tracing::info!("push server requested close");
                break;
            }
            Ok(Frame::Ignored(what)) => tracing::debug!(%what, "ignoring push frame"),
            Err(err) => tracing::warn!(error = %err, "dropping undecodable push frame"),
        }
    }

    match stream.reunite(sink) {
        Ok(socket) => {
            if let Err(err) = socket.close(Some(NORMAL_CLOSURE), Some("client closed")) {
                tracing::debug!(error = %err, "websocket close failed");
            }
        }
        Err(err) => tracing::debug!(error = %err, "could not reunite websocket halves"),
    }
}
