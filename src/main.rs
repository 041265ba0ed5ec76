#![allow(non_snake_case)]

mod client;
mod model;

use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to initialize logger");

    dioxus::launch(client::App);
}
