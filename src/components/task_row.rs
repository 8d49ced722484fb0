//! Task Row Component
//!
//! One task: completion checkbox, title with a buffered edit mode, note
//! box, and a delete action. All commits go through the parent board;
//! this component never talks to the network.

use leptos::prelude::*;

use crate::models::Task;
use crate::tasks::normalize_title;

#[component]
pub fn TaskRow(
    task: Memo<Option<Task>>,
    #[prop(into)] on_change: Callback<Task>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    // Title keystrokes land here, not in the committed task
    let (title_draft, set_title_draft) = signal(String::new());

    let is_done = move || task.get().map(|t| t.is_done).unwrap_or(false);
    let title = move || task.get().map(|t| t.title).unwrap_or_default();
    let note = move || task.get().map(|t| t.note).unwrap_or_default();

    let start_editing = move |_| {
        set_title_draft.set(title());
        set_editing.set(true);
    };

    let save_title = move || {
        let Some(current) = task.get_untracked() else { return };
        match normalize_title(&title_draft.get_untracked()) {
            Some(next_title) => {
                on_change.run(Task { title: next_title, ..current });
            }
            // Blank after trim: discard the edit, keep the prior title
            None => set_title_draft.set(current.title),
        }
        set_editing.set(false);
    };

    let toggle_done = move |ev: web_sys::Event| {
        let Some(mut current) = task.get_untracked() else { return };
        current.is_done = event_target_checked(&ev);
        on_change.run(current);
    };

    let edit_note = move |ev: web_sys::Event| {
        let Some(mut current) = task.get_untracked() else { return };
        current.note = event_target_value(&ev);
        on_change.run(current);
    };

    let delete = move |_| {
        if let Some(current) = task.get_untracked() {
            on_delete.run(current.id);
        }
    };

    view! {
        <div class=move || if is_done() { "task-row done" } else { "task-row" }>
            <input type="checkbox" prop:checked=is_done on:change=toggle_done/>

            <div class="task-title">
                <Show when=move || !editing.get()>
                    <p class=move || if is_done() { "title-text done" } else { "title-text" }>
                        {title}
                    </p>
                    <button class="edit-btn" title="Edit Task" on:click=start_editing>"✏️"</button>
                </Show>
                <Show when=move || editing.get()>
                    <input
                        type="text"
                        class="title-input"
                        prop:value=move || title_draft.get()
                        on:input=move |ev| set_title_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" { save_title(); }
                        }
                    />
                    <button class="save-btn" title="Save" on:click=move |_| save_title()>"✔️"</button>
                </Show>
            </div>

            <button class="task-delete-btn" title="Delete Task" on:click=delete>"❌"</button>

            <textarea
                class="task-note"
                placeholder="Add notes..."
                prop:value=note
                on:input=edit_note
            ></textarea>
        </div>
    }
}
