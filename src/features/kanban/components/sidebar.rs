use leptos::prelude::*;

use crate::core::models::Theme;
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn BoardSidebar(hook: BoardHook) -> impl IntoView {
    let shown = move || hook.with(|c| c.preferences().show_sidebar);
    let theme = move || hook.with(|c| c.preferences().theme);
    let board_count = move || hook.with(|c| c.boards().len());

    view! {
        <div id="side-bar-div" class="side-bar" style:display=move || if shown() { "flex" } else { "none" }>
            <div class="side-logo-div">
                <img id="logo" class="logo" src=move || theme().logo() alt="logo" />
            </div>
            <h4 class="headline-sidepanel">{move || format!("ALL BOARDS ({})", board_count())}</h4>
            <div id="boards-nav-links-div" class="boards-nav-links-div">
                {move || {
                    hook.with(|c| c.board_links())
                        .into_iter()
                        .map(|link| {
                            let name = link.name.clone();
                            view! {
                                <button
                                    class="board-btn"
                                    class:active=link.active
                                    on:click=move |_| {
                                        let name = name.clone();
                                        hook.run("Select board", move |c| c.select_board(&name));
                                    }
                                >
                                    {link.name}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                id="create-board-btn"
                class="create-board-btn"
                on:click=move |_| {
                    hook.run("Open board form", |c| c.open_create_board());
                }
            >
                "+ Create New Board"
            </button>
            <div class="toggle-div">
                <label class="switch">
                    <input
                        id="switch"
                        type="checkbox"
                        prop:checked=move || theme() == Theme::Light
                        on:change=move |_| {
                            hook.run("Toggle theme", |c| c.toggle_theme());
                        }
                    />
                    <span class="slider round"></span>
                </label>
            </div>
            <button
                id="hide-side-bar-btn"
                class="hide-side-bar-btn"
                on:click=move |_| {
                    hook.run("Hide sidebar", |c| c.toggle_sidebar(false));
                }
            >
                "Hide Sidebar"
            </button>
        </div>
        <button
            id="show-side-bar-btn"
            class="show-side-bar-btn"
            style:display=move || if shown() { "none" } else { "flex" }
            on:click=move |_| {
                hook.run("Show sidebar", |c| c.toggle_sidebar(true));
            }
        >
            "👁"
        </button>
    }
}
