use leptos::prelude::*;

use crate::core::config::Config;
use crate::core::models::Theme;
use crate::features::kanban::hooks::use_board;
use crate::pages::Kanban;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let hook = use_board(config);
    let theme_class = move || {
        if hook.with(|c| c.preferences().theme) == Theme::Light {
            "app light-theme"
        } else {
            "app"
        }
    };

    view! {
        <main class=theme_class>
            <Kanban hook=hook />
        </main>
    }
}
