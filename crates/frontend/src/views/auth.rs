use crate::components::{AuthForm, AuthMode};
use sneakerdesk_frontend_common::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct AuthCardProps {
    title: AttrValue,
    children: Children,
}

#[function_component(AuthCard)]
fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">{"SneakerDesk"}</h1>
                    <p class="mt-2 text-gray-600">{props.title.clone()}</p>
                </div>
                <div class="bg-white rounded-lg shadow-lg p-8">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    html! {
        <AuthCard title="Sign in to manage orders">
            <AuthForm mode={AuthMode::Login} />
            <p class="mt-6 text-center text-sm text-gray-600">
                {"No account yet? "}
                <Link<Route> to={Route::Signup} classes="text-emerald-700 font-medium">{"Sign up"}</Link<Route>>
            </p>
        </AuthCard>
    }
}

#[function_component(SignupView)]
pub fn signup_view() -> Html {
    html! {
        <AuthCard title="Create an account">
            <AuthForm mode={AuthMode::Signup} />
            <p class="mt-6 text-center text-sm text-gray-600">
                {"Already registered? "}
                <Link<Route> to={Route::Login} classes="text-emerald-700 font-medium">{"Log in"}</Link<Route>>
            </p>
        </AuthCard>
    }
}
