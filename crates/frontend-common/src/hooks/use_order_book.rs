//! Order list state: one initial fetch, then live updates while mounted

use crate::auth::{SessionAction, use_session};
use crate::client::api_client;
use crate::realtime::{OrderBook, OrderEvent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Orders as seen by a component
#[derive(Clone, PartialEq)]
pub struct OrderFeed {
    pub book: UseReducerHandle<OrderBook>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Load the order list with the session token and keep it live.
///
/// The push connection is opened when the calling component mounts and
/// closed when it unmounts.
#[hook]
pub fn use_order_book() -> OrderFeed {
    let session = use_session();
    let book = use_reducer(OrderBook::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Initial full listing
    {
        let book = book.clone();
        let loading = loading.clone();
        let error = error.clone();
        let session = session.clone();

        use_effect_with(session.token(), move |token| {
            let token = token.clone();
            spawn_local(async move {
                let Some(token) = token else {
                    loading.set(false);
                    return;
                };

                let result = match api_client() {
                    Ok(client) => client.fetch_shoes(&token).await,
                    Err(err) => Err(err),
                };

                match result {
                    Ok(shoes) => {
                        tracing::debug!(count = shoes.len(), "order listing loaded");
                        book.dispatch(OrderEvent::Loaded(shoes));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to fetch orders");
                        if err.status() == Some(401) {
                            session.dispatch(SessionAction::ClearToken);
                        }
                        error.set(Some(format!("Failed to fetch orders: {err}")));
                    }
                }
                loading.set(false);
            });
        });
    }

    // Live updates for as long as the component is mounted
    #[cfg(target_arch = "wasm32")]
    {
        use crate::config::AppConfig;
        use crate::realtime::{LiveConnection, primus};

        let book = book.clone();
        use_effect_with((), move |()| {
            let on_message = Callback::from(move |message| {
                book.dispatch(OrderEvent::Pushed(message));
            });

            let connection = primus::endpoint(AppConfig::api_origin())
                .and_then(|url| LiveConnection::open(&url, on_message));
            if let Err(err) = &connection {
                tracing::error!(error = %err, "live order updates unavailable");
            }

            move || drop(connection)
        });
    }

    OrderFeed {
        book,
        loading: *loading,
        error: (*error).clone(),
    }
}
