#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    dioxus::launch(jobzee::client::App);
}
