//! Username/password form shared by the login and signup views

use sneakerdesk_frontend_common::auth::{SessionAction, use_session};
use sneakerdesk_frontend_common::{Route, api_client};
use sneakerdesk_http::{ClientError, Credentials};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Create account",
        }
    }

    fn describe(self, err: &ClientError) -> String {
        match (self, err) {
            (Self::Login, ClientError::AuthenticationFailed(_)) => {
                "Wrong username or password.".to_string()
            }
            (Self::Signup, ClientError::BadRequest(message)) => {
                format!("Could not create the account: {message}")
            }
            (_, err) if err.is_transport() => {
                "The sneaker API is unreachable. Try again in a moment.".to_string()
            }
            (_, err) => err.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let mode = props.mode;
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let credentials = Credentials {
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            if credentials.username.is_empty() || credentials.password.is_empty() {
                error.set(Some("Enter a username and a password.".to_string()));
                return;
            }

            let session = session.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            let error = error.clone();

            spawn_local(async move {
                busy.set(true);
                error.set(None);

                let result = match api_client() {
                    Ok(client) => match mode {
                        AuthMode::Login => client.login(&credentials).await,
                        AuthMode::Signup => client.signup(&credentials).await,
                    },
                    Err(err) => Err(err),
                };

                match result {
                    Ok(token) => {
                        tracing::info!(username = %credentials.username, "signed in");
                        session.dispatch(SessionAction::SetToken(token));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Orders);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, ?mode, "authentication request failed");
                        error.set(Some(mode.describe(&err)));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form class="space-y-4" onsubmit={on_submit}>
            if let Some(message) = &*error {
                <div class="bg-red-50 border border-red-200 rounded-lg p-3 text-sm text-red-700">
                    {message}
                </div>
            }
            <input
                type="text"
                autocomplete="username"
                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-emerald-500"
                placeholder="Username"
                value={(*username).clone()}
                oninput={on_username}
            />
            <input
                type="password"
                autocomplete={if props.mode == AuthMode::Login { "current-password" } else { "new-password" }}
                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:border-emerald-500"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password}
            />
            <button
                type="submit"
                class="w-full px-4 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium disabled:opacity-50"
                disabled={*busy}
            >
                { if *busy { "Please wait..." } else { props.mode.submit_label() } }
            </button>
        </form>
    }
}
