//! Session context shared by the router guard and every view

use crate::session::{LocalTokenStore, Session};
use std::rc::Rc;
use yew::prelude::*;

/// The browser-backed session used by the app
pub type AppSession = Session<LocalTokenStore>;

/// Snapshot of the session handed to components.
///
/// The session itself is shared; `token` is the value observed at the last
/// reduction, so components re-render when it changes.
#[derive(Clone, Debug)]
pub struct SessionState {
    session: Rc<AppSession>,
    token: Option<String>,
}

impl SessionState {
    pub fn new(session: AppSession) -> Self {
        let token = session.token();
        Self {
            session: Rc::new(session),
            token,
        }
    }

    pub fn session(&self) -> &Rc<AppSession> {
        &self.session
    }

    pub fn token(&self) -> Option<String> {
        self.token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn resync(&self) -> Rc<Self> {
        Rc::new(Self {
            session: Rc::clone(&self.session),
            token: self.session.token(),
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Session::new(LocalTokenStore::default()))
    }
}

impl PartialEq for SessionState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.token == other.token
    }
}

/// Session context actions
pub enum SessionAction {
    /// A login or signup produced a token
    SetToken(String),
    /// Logout
    ClearToken,
    /// Re-read the session after something (validation) may have changed it
    Sync,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SetToken(token) => self.session.set_token(token),
            SessionAction::ClearToken => self.session.clear_token(),
            SessionAction::Sync => {}
        }

        let next = self.resync();
        if *next == *self {
            self
        } else {
            next
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component; loads the persisted token once on mount
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

