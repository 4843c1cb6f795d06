mod app;
mod auth_guard;
mod components;
mod views;

use app::App;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    yew::Renderer::<App>::new().render();
}

/// Route `tracing` output to the browser console
fn init_tracing() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .init();
}
