//! Single order, kept current by the push channel

use sneakerdesk_frontend_common::components::{Spinner, StatusBadge};
use sneakerdesk_frontend_common::hooks::use_order_book;
use sneakerdesk_frontend_common::Route;
use sneakerdesk_http::ShoeId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderDetailProps {
    pub id: String,
}

#[function_component(OrderDetailView)]
pub fn order_detail_view(props: &OrderDetailProps) -> Html {
    let feed = use_order_book();
    let id = ShoeId::new(props.id.clone());

    let body = if feed.loading {
        html! { <Spinner label={Some(AttrValue::from("Loading order..."))} /> }
    } else if let Some(message) = &feed.error {
        html! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-4 text-red-700">{message}</div>
        }
    } else if let Some(shoe) = feed.book.find(&id) {
        html! {
            <div class="bg-white rounded-lg shadow p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold text-gray-900">{format!("Order {}", shoe.id)}</h2>
                    <StatusBadge status={shoe.status.clone()} />
                </div>
                <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    { for shoe.details.keys().map(|field| html! {
                        <div key={field.clone()}>
                            <dt class="text-sm text-gray-500">{field}</dt>
                            <dd class="text-gray-900">{shoe.detail(field).unwrap_or_default()}</dd>
                        </div>
                    }) }
                </dl>
            </div>
        }
    } else {
        html! { <p class="text-gray-500 text-center py-10">{"Order not found."}</p> }
    };

    html! {
        <div class="min-h-screen">
            <nav class="bg-white border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-4 flex h-16 items-center">
                    <Link<Route> to={Route::Orders} classes="text-gray-600 hover:text-gray-900">
                        {"← Back to orders"}
                    </Link<Route>>
                </div>
            </nav>
            <main class="max-w-5xl mx-auto px-4 py-6">
                {body}
            </main>
        </div>
    }
}
