use leptos::prelude::*;

use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::TaskItem;

#[component]
pub fn TaskCard(item: TaskItem, hook: BoardHook) -> impl IntoView {
    let task_id = item.task_id.clone();
    view! {
        <div
            class="task-div"
            data-task-id=item.task_id
            on:click=move |_| {
                let task_id = task_id.clone();
                hook.run("Open task", move |c| c.open_edit_task(&task_id));
            }
        >
            {item.title}
        </div>
    }
}
