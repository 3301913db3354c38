use leptos::ev;
use leptos::prelude::*;

use super::StatusSelect;
use crate::core::models::TaskStatus;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::{ModalKind, TaskForm};

#[component]
pub fn TaskModal(hook: BoardHook) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::default());

    let visible = move || hook.with(|c| c.modals().is_visible(ModalKind::CreateTask));
    let error = move || hook.with(|c| c.modals().error().map(str::to_string));
    let columns = hook.with_untracked(|c| c.config().board.columns.clone());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        };
        let created = hook.run("Create task", move |c| {
            c.modals_mut().create_form = form;
            c.create_task()
        });

        if created {
            set_title.set(String::new());
            set_description.set(String::new());
            set_status.set(TaskStatus::default());
        }
    };

    let close_modal = move |_| hook.apply(|c| c.close_modal(ModalKind::CreateTask));

    view! {
        <form
            id="new-task-modal-window"
            class="modal-window"
            style:display=move || if visible() { "block" } else { "none" }
            on:submit=handle_submit
        >
            <div class="modal-header">
                <h3>"Add New Task"</h3>
            </div>
            <div class="form-group">
                <label>"Title"</label>
                <input
                    id="title-input"
                    type="text"
                    placeholder="e.g. Take chilled break"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Description"</label>
                <textarea
                    id="desc-input"
                    rows="4"
                    placeholder="e.g. It's always good to take a break."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <StatusSelect id="select-status" columns=columns status=status set_status=set_status />
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
            <div class="modal-actions">
                <button type="submit" id="create-task-btn" class="submit-btn">"Create Task"</button>
                <button type="button" id="cancel-add-task-btn" class="cancel-btn" on:click=close_modal>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
