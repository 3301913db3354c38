use leptos::ev;
use leptos::prelude::*;

use super::StatusSelect;
use crate::core::models::TaskStatus;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::{ModalKind, TaskForm};

#[component]
pub fn EditTaskModal(hook: BoardHook) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::default());

    let visible = move || hook.with(|c| c.modals().is_visible(ModalKind::EditTask));
    let error = move || hook.with(|c| c.modals().error().map(str::to_string));
    let columns = hook.with_untracked(|c| c.config().board.columns.clone());

    // Changes only when a task is (re)bound, not on every board update, so
    // typing is never overwritten.
    let binding = Memo::new(move |_| hook.with(|c| c.modals().edit_binding().map(|b| b.generation)));
    Effect::new(move |_| {
        if binding.get().is_some() {
            let form = hook.with_untracked(|c| c.modals().edit_form.clone());
            set_title.set(form.title);
            set_description.set(form.description);
            set_status.set(form.status);
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = TaskForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        };
        hook.run("Save task", move |c| {
            c.modals_mut().edit_form = form;
            c.save_task_changes()
        });
    };

    let delete_task = move |_| {
        hook.run("Delete task", |c| c.delete_task());
    };

    let close_modal = move |_| hook.apply(|c| c.close_modal(ModalKind::EditTask));

    view! {
        <form
            class="edit-task-modal-window"
            style:display=move || if visible() { "block" } else { "none" }
            on:submit=handle_submit
        >
            <div class="modal-header">
                <h3>"Edit Task"</h3>
            </div>
            <div class="form-group">
                <label>"Title"</label>
                <input
                    id="edit-task-title-input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Description"</label>
                <textarea
                    id="edit-task-desc-input"
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <StatusSelect id="edit-select-status" columns=columns status=status set_status=set_status />
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
            <div class="modal-actions">
                <button type="submit" id="save-task-changes-btn" class="submit-btn">"Save Changes"</button>
                <button type="button" id="cancel-edit-btn" class="cancel-btn" on:click=close_modal>
                    "Cancel"
                </button>
                <button type="button" id="delete-task-btn" class="delete-btn" on:click=delete_task>
                    "Delete Task"
                </button>
            </div>
        </form>
    }
}
