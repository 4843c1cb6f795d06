//! Order overview with live updates

use sneakerdesk_frontend_common::auth::{SessionAction, use_session};
use sneakerdesk_frontend_common::components::{Spinner, StatusBadge};
use sneakerdesk_frontend_common::hooks::use_order_book;
use sneakerdesk_frontend_common::Route;
use sneakerdesk_http::Shoe;
use yew::prelude::*;
use yew_router::prelude::*;

/// Detail fields worth a glance in the list, first one present wins
const SUMMARY_FIELDS: [&str; 4] = ["shoeType", "type", "name", "customer"];

fn summary(shoe: &Shoe) -> String {
    SUMMARY_FIELDS
        .iter()
        .find_map(|field| shoe.detail(field))
        .unwrap_or_else(|| format!("Order {}", shoe.id))
}

#[function_component(OrdersView)]
pub fn orders_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let feed = use_order_book();

    let on_logout = Callback::from(move |_| {
        session.dispatch(SessionAction::ClearToken);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let body = if feed.loading {
        html! { <Spinner label={Some(AttrValue::from("Loading orders..."))} /> }
    } else if let Some(message) = &feed.error {
        html! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-4 text-red-700">{message}</div>
        }
    } else if feed.book.shoes().is_empty() {
        html! { <p class="text-gray-500 text-center py-10">{"No orders yet."}</p> }
    } else {
        html! {
            <ul class="divide-y divide-gray-200 bg-white rounded-lg shadow">
                { for feed.book.shoes().iter().map(|shoe| html! {
                    <li key={shoe.id.to_string()}>
                        <Link<Route>
                            to={Route::OrderDetail { id: shoe.id.to_string() }}
                            classes="flex items-center justify-between px-4 py-3 hover:bg-gray-50"
                        >
                            <span class="text-gray-900">{summary(shoe)}</span>
                            <StatusBadge status={shoe.status.clone()} />
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="min-h-screen">
            <nav class="bg-white border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-4 flex justify-between h-16 items-center">
                    <h1 class="text-2xl font-bold text-gray-900">{"Orders"}</h1>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-600">
                            {format!("{} orders", feed.book.count())}
                        </span>
                        <button onclick={on_logout} class="text-sm text-gray-600 hover:text-gray-900">
                            {"Sign Out"}
                        </button>
                    </div>
                </div>
            </nav>
            <main class="max-w-5xl mx-auto px-4 py-6">
                {body}
            </main>
        </div>
    }
}
