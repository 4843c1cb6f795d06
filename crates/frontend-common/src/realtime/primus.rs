//! Primus websocket framing
//!
//! Every text frame is one JSON document. JSON strings are transport
//! control (heartbeats, server-initiated close); JSON objects are
//! application envelopes.

use super::error::RealtimeError;
use super::message::PushMessage;
use crate::config::AppConfig;
use serde_json::Value;
use url::Url;

const PING_PREFIX: &str = "primus::ping::";
const PONG_PREFIX: &str = "primus::pong::";
const SERVER_CLOSE: &str = "primus::server::close";

/// A decoded inbound frame
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Heartbeat; must be answered with [`pong`] carrying the same timestamp
    Ping(String),
    /// The server is ending the session
    ServerClose,
    Message(PushMessage),
    /// Well-formed but of no interest to this client
    Ignored(String),
}

pub fn decode_frame(text: &str) -> Result<Frame, RealtimeError> {
    let value: Value = serde_json::from_str(text)?;

    match value {
        Value::String(control) => Ok(decode_control(control)),
        Value::Object(_) => {
            let action = value
                .get("action")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if !PushMessage::ACTIONS.contains(&action) {
                return Ok(Frame::Ignored(format!("action `{action}`")));
            }
            Ok(Frame::Message(serde_json::from_value(value)?))
        }
        other => Ok(Frame::Ignored(format!("non-envelope frame {other}"))),
    }
}

fn decode_control(control: String) -> Frame {
    if let Some(timestamp) = control.strip_prefix(PING_PREFIX) {
        Frame::Ping(timestamp.to_owned())
    } else if control == SERVER_CLOSE {
        Frame::ServerClose
    } else {
        Frame::Ignored(control)
    }
}

/// Encoded heartbeat reply for a ping carrying `timestamp`
pub fn pong(timestamp: &str) -> String {
    Value::String(format!("{PONG_PREFIX}{timestamp}")).to_string()
}

/// Websocket endpoint of the push server hosted on `origin`
pub fn endpoint(origin: &str) -> Result<Url, RealtimeError> {
    let mut url = Url::parse(origin)?;

    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(RealtimeError::InvalidEndpoint(format!(
                "unsupported scheme `{other}`"
            )));
        }
    };
    url.set_scheme(scheme)
        .map_err(|()| RealtimeError::InvalidEndpoint(format!("cannot switch {origin} to {scheme}")))?;
    url.set_path(AppConfig::PUSH_PATH);
    url.set_query(None);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sneakerdesk_http::ShoeId;

    #[test]
    fn test_ping_is_answered_with_matching_pong() {
        let frame = decode_frame(r#""primus::ping::1718000000000""#).unwrap();
        assert_eq!(frame, Frame::Ping("1718000000000".into()));
        assert_eq!(pong("1718000000000"), r#""primus::pong::1718000000000""#);
    }

    #[test]
    fn test_server_close() {
        assert_eq!(
            decode_frame(r#""primus::server::close""#).unwrap(),
            Frame::ServerClose
        );
    }

    #[test]
    fn test_envelope_becomes_message() {
        let frame = decode_frame(
            r#"{"action":"updateStatus","data":{"shoe":{"_id":"65a1","status":"shipped"}}}"#,
        )
        .unwrap();

        match frame {
            Frame::Message(PushMessage::UpdateStatus { shoe }) => {
                assert_eq!(shoe.id, ShoeId::new("65a1"));
                assert_eq!(shoe.status, "shipped");
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_post_with_virtual_id_is_delivered() {
        let frame =
            decode_frame(r#"{"action":"post","data":{"shoe":{"_id":"65a1","id":"65a1","status":null}}}"#)
                .unwrap();

        match frame {
            Frame::Message(PushMessage::Post { shoe }) => {
                assert_eq!(shoe.id, ShoeId::new("65a1"));
                assert!(shoe.status.is_empty());
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_unknown_action_is_ignored_not_an_error() {
        let frame = decode_frame(r#"{"action":"delete","data":{"id":"65a1"}}"#).unwrap();
        assert!(matches!(frame, Frame::Ignored(_)));

        let frame = decode_frame(r#"{"data":{}}"#).unwrap();
        assert!(matches!(frame, Frame::Ignored(_)));
    }

    #[test]
    fn test_malformed_frames_are_errors() {
        assert!(matches!(
            decode_frame("not json"),
            Err(RealtimeError::Decode(_))
        ));
        assert!(matches!(
            decode_frame(r#"{"action":"post","data":{"shoe":"oops"}}"#),
            Err(RealtimeError::Decode(_))
        ));
    }

    #[test]
    fn test_endpoint_switches_to_websocket_scheme() {
        let url = endpoint("https://sneaker-api-4zoy.onrender.com").unwrap();
        assert_eq!(url.as_str(), "wss://sneaker-api-4zoy.onrender.com/primus");

        let url = endpoint("http://localhost:3000/").unwrap();
        assert_eq!(url.as_str(), "ws://localhost:3000/primus");
    }

    #[test]
    fn test_endpoint_rejects_other_schemes() {
        assert!(matches!(
            endpoint("ftp://example.com"),
            Err(RealtimeError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            endpoint("not a url"),
            Err(RealtimeError::InvalidEndpoint(_))
        ));
    }
}
