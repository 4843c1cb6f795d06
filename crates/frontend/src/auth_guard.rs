//! Authentication guard wrapped around every routed view

use sneakerdesk_frontend_common::auth::{SessionAction, SessionContext, use_session};
use sneakerdesk_frontend_common::components::Spinner;
use sneakerdesk_frontend_common::{Navigation, Route, TransitionTickets, api_client, authorize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub route: Route,
    pub children: Children,
}

/// Holds back a protected view until the session token has been validated.
///
/// Each transition gets a ticket; a decision that arrives after the user has
/// already navigated elsewhere is dropped.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let decision = use_state(|| None::<(Route, Navigation)>);
    let tickets = use_mut_ref(TransitionTickets::default);

    {
        let session = session.clone();
        let decision = decision.clone();
        let tickets = tickets.clone();

        use_effect_with(props.route.clone(), move |route| {
            let issued = tickets.borrow_mut().issue();
            let route = route.clone();

            spawn_local(async move {
                let navigation = decide(&route, &session).await;
                if !tickets.borrow().is_current(issued) {
                    tracing::debug!(?route, "discarding superseded guard decision");
                    return;
                }
                session.dispatch(SessionAction::Sync);
                decision.set(Some((route, navigation)));
            });
        });
    }

    if !props.route.requires_auth() {
        return html! { <>{ props.children.clone() }</> };
    }

    match &*decision {
        Some((route, Navigation::Proceed)) if *route == props.route => {
            html! { <>{ props.children.clone() }</> }
        }
        Some((route, Navigation::Redirect(to))) if *route == props.route => {
            html! { <Redirect<Route> to={to.clone()} /> }
        }
        _ => html! {
            <Spinner label={Some(AttrValue::from("Checking session..."))} full_screen=true />
        },
    }
}

async fn decide(route: &Route, session: &SessionContext) -> Navigation {
    match api_client() {
        Ok(client) => authorize(route, &**session.session(), &client).await,
        Err(err) if route.requires_auth() => {
            tracing::error!(error = %err, "API client unavailable");
            Navigation::Redirect(Route::Login)
        }
        Err(_) => Navigation::Proceed,
    }
}
