mod auth_form;

pub use auth_form::{AuthForm, AuthMode};
