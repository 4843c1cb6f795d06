//! Route table and the navigation guard in front of protected views

use crate::session::{Session, TokenStore};
use sneakerdesk_http::SneakerClient;
use yew_router::Routable;

/// Client-side routes
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/orders")]
    Orders,
    #[at("/orders/:id")]
    OrderDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether entering this route needs a token the API still accepts
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Orders | Self::OrderDetail { .. })
    }
}

/// Outcome of a guarded transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Issues one ticket per guarded transition so that only the latest
/// transition's decision is acted upon
#[derive(Debug, Default)]
pub struct TransitionTickets {
    latest: u64,
}

impl TransitionTickets {
    /// Start a new transition, superseding every earlier one
    pub const fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` belongs to the most recent transition
    pub const fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Decide whether navigating to `target` may complete.
///
/// Public routes proceed without touching the network. Protected routes
/// proceed only if the session token validates; otherwise the user is sent
/// back to the login route.
pub async fn authorize<S: TokenStore>(
    target: &Route,
    session: &Session<S>,
    client: &SneakerClient,
) -> Navigation {
    if !target.requires_auth() {
        return Navigation::Proceed;
    }

    if session.validate_token(client).await {
        Navigation::Proceed
    } else {
        tracing::debug!(?target, "redirecting unauthenticated navigation");
        Navigation::Redirect(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Login));
        assert_eq!(Route::recognize("/signup"), Some(Route::Signup));
        assert_eq!(Route::recognize("/orders"), Some(Route::Orders));
        assert_eq!(
            Route::recognize("/orders/65a1"),
            Some(Route::OrderDetail { id: "65a1".into() })
        );
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn test_superseded_ticket_is_not_current() {
        let mut tickets = TransitionTickets::default();

        let first = tickets.issue();
        assert!(tickets.is_current(first));

        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }

    #[test]
    fn test_only_order_views_are_protected() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(!Route::NotFound.requires_auth());
        assert!(Route::Orders.requires_auth());
        assert!(Route::OrderDetail { id: "1".into() }.requires_auth());
    }
}
