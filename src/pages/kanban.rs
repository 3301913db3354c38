use leptos::prelude::*;

use crate::features::kanban::components::{
    BoardModal, BoardSidebar, EditTaskModal, KanbanColumn, KanbanHeader, TaskModal,
};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn Kanban(hook: BoardHook) -> impl IntoView {
    let overlay = move || hook.with(|c| c.modals().overlay_visible());

    view! {
        <div class="kanban-page">
            <BoardSidebar hook=hook />
            <div class="main-content">
                <KanbanHeader hook=hook />
                // Columns are rebuilt from the controller's view on every change
                <div class="container">
                    {move || {
                        hook.with(|c| c.view().columns.clone())
                            .into_iter()
                            .map(|column| view! { <KanbanColumn column=column hook=hook /> })
                            .collect_view()
                    }}
                </div>
            </div>
            <div
                id="filterDiv"
                class="filter-div"
                style:display=move || if overlay() { "block" } else { "none" }
                on:click=move |_| hook.apply(|c| c.dismiss_overlay())
            ></div>
            <TaskModal hook=hook />
            <EditTaskModal hook=hook />
            <BoardModal hook=hook />
        </div>
    }
}
