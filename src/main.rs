//! Trip-Plan Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod picker;
mod platform;
mod seed;
mod storage;
mod store;
mod suggest;
mod timer;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
