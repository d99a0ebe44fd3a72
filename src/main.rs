mod app_config;
mod dom;
mod game_controller;
mod game_view;
mod host;
mod http;
mod menu_controller;
mod runtime;

fn main() {
    console_error_panic_hook::set_once();
    runtime::boot();
}

