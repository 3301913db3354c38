use leptos::ev;
use leptos::prelude::*;

use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::ModalKind;

#[component]
pub fn BoardModal(hook: BoardHook) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let visible = move || hook.with(|c| c.modals().is_visible(ModalKind::CreateBoard));
    let error = move || hook.with(|c| c.modals().error().map(str::to_string));

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let board_name = name.get_untracked();
        let created = hook.run("Create board", move |c| {
            c.modals_mut().board_form.name = board_name;
            c.create_board()
        });
        if created {
            set_name.set(String::new());
        }
    };

    let close_modal = move |_| hook.apply(|c| c.close_modal(ModalKind::CreateBoard));

    view! {
        <form
            id="new-board-modal-window"
            class="modal-window"
            style:display=move || if visible() { "block" } else { "none" }
            on:submit=handle_submit
        >
            <div class="modal-header">
                <h3>"Add New Board"</h3>
            </div>
            <div class="form-group">
                <label>"Board Name"</label>
                <input
                    id="board-title-input"
                    type="text"
                    placeholder="e.g. Marketing"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
            <div class="modal-actions">
                <button type="submit" id="save-board-btn" class="submit-btn">"Create Board"</button>
                <button type="button" id="cancel-add-board-btn" class="cancel-btn" on:click=close_modal>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
