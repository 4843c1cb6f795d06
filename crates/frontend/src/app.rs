use crate::auth_guard::RequireAuth;
use crate::views::{LoginView, OrderDetailView, OrdersView, SignupView};
use sneakerdesk_frontend_common::{Route, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <HashRouter>
                <Switch<Route> render={switch} />
            </HashRouter>
        </SessionProvider>
    }
}

fn switch(route: Route) -> Html {
    let view = match &route {
        Route::Login => html! { <LoginView /> },
        Route::Signup => html! { <SignupView /> },
        Route::Orders => html! { <OrdersView /> },
        Route::OrderDetail { id } => html! { <OrderDetailView id={id.clone()} /> },
        Route::NotFound => return html! { <Redirect<Route> to={Route::Login} /> },
    };

    html! {
        <RequireAuth {route}>
            {view}
        </RequireAuth>
    }
}
