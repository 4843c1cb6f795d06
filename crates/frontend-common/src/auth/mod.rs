//! Session context for the component tree

pub mod context;

pub use context::{
    AppSession, SessionAction, SessionContext, SessionProvider, SessionState, use_session,
};
