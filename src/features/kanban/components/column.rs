use leptos::prelude::*;

use super::TaskCard;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::ColumnView;

#[component]
pub fn KanbanColumn(column: ColumnView, hook: BoardHook) -> impl IntoView {
    let status = column.status.as_str();
    view! {
        <div class="column-div" data-status=status>
            <div class="column-head-div">
                <span class="dot" id=format!("{}-dot", status)></span>
                <h4 class="columnHeader">{column.heading}</h4>
            </div>
            <div class="tasks-container">
                {column
                    .items
                    .into_iter()
                    .map(|item| view! { <TaskCard item=item hook=hook /> })
                    .collect_view()}
            </div>
        </div>
    }
}
