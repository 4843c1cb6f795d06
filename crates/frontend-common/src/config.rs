//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Origin of the hosted sneaker API, used when no build-time override is set
    pub const DEFAULT_API_ORIGIN: &'static str = "https://sneaker-api-4zoy.onrender.com";

    /// Local storage key holding the raw bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Path the push server mounts its websocket endpoint on
    pub const PUSH_PATH: &'static str = "/primus";

    /// API origin, overridable at build time via `SNEAKERDESK_API_ORIGIN`
    pub fn api_origin() -> &'static str {
        match option_env!("SNEAKERDESK_API_ORIGIN") {
            Some(origin) if !origin.is_empty() => origin,
            _ => Self::DEFAULT_API_ORIGIN,
        }
    }
}
