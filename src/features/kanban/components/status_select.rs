use leptos::prelude::*;

use crate::core::models::TaskStatus;

/// Status picked in the dropdown, or `None` for a value outside the columns.
pub fn parse_status_choice(value: &str) -> Option<TaskStatus> {
    match value.parse::<TaskStatus>() {
        Ok(status) => Some(status),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Status dropdown listing the configured columns.
#[component]
pub fn StatusSelect(
    #[prop(into)] id: String,
    columns: Vec<TaskStatus>,
    status: ReadSignal<TaskStatus>,
    set_status: WriteSignal<TaskStatus>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Current Status"</label>
            <select
                id=id
                class="select-status"
                prop:value=move || status.get().as_str()
                on:change=move |ev| {
                    if let Some(value) = parse_status_choice(&event_target_value(&ev)) {
                        set_status.set(value);
                    }
                }
            >
                {columns
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
