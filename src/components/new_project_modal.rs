//! New Project Modal
//!
//! Overlay dialog for naming and creating a project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::session::use_session;
use crate::store::{store_insert_project, use_app_store};

#[component]
pub fn NewProjectModal(set_open: WriteSignal<bool>) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());

    let create = move || {
        let trimmed = name.get().trim().to_string();
        // Blank names never leave the client
        if trimmed.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::create_project(&session, &trimmed).await {
                Ok(project) => {
                    store_insert_project(&store, project);
                    set_open.set(false);
                }
                Err(ApiError::Unauthorized(_)) => session.logout(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Error creating project: {err}").into());
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Create New Project"</h2>
                <input
                    type="text"
                    placeholder="Enter project name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" { create(); }
                    }
                />
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button class="create-btn" on:click=move |_| create()>"Create"</button>
                </div>
            </div>
        </div>
    }
}
