use leptos::prelude::*;

use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanHeader(hook: BoardHook) -> impl IntoView {
    let board_name = move || hook.with(|c| c.active_board().unwrap_or_default().to_string());
    let sidebar_shown = move || hook.with(|c| c.preferences().show_sidebar);
    let no_board = move || hook.with(|c| c.active_board().is_none());

    view! {
        <header class="header">
            <div class="header-name-div">
                <h3 id="header-board-name" class="header-board-name">{board_name}</h3>
                // Mobile replacement for the sidebar buttons
                <button
                    id="dropdownBtn"
                    class="dropdownBtn"
                    on:click=move |_| {
                        hook.run("Toggle sidebar", |c| c.toggle_sidebar_dropdown());
                    }
                >
                    <img
                        id="dropDownIcon"
                        alt="toggle boards"
                        src=move || {
                            if sidebar_shown() {
                                "./assets/icon-chevron-up.svg"
                            } else {
                                "./assets/icon-chevron-down.svg"
                            }
                        }
                    />
                </button>
            </div>
            <button
                id="add-new-task-btn"
                class="add-new-task-btn"
                disabled=no_board
                on:click=move |_| hook.apply(|c| c.open_create_task())
            >
                "+ Add New Task"
            </button>
        </header>
    }
}
