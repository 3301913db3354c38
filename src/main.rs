use leptos::prelude::*;

use kanban_board_ui::app::App;
use kanban_board_ui::core::Config;
use kanban_board_ui::logger;

fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = Config::load_embedded();
    if let Err(e) = logger::init(config.log_level()) {
        web_sys::console::error_1(&format!("Failed to start logging: {}", e).into());
    }
    if let Some(e) = rejected {
        log::warn!("Bundled configuration rejected, using defaults: {}", e);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
