//! Project List Component
//!
//! Directory of the user's projects with selection and a completion toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::session::use_session;
use crate::store::{store_set_completed, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectList() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();

    view! {
        <div class="project-list">
            <h2>"Projects"</h2>
            <Show
                when=move || !store.projects().read().is_empty()
                fallback=|| view! { <p class="project-list-empty">"No projects yet."</p> }
            >
                <ul>
                    <For
                        each=move || store.projects().get()
                        key=|p| (p.id.clone(), p.name.clone(), p.is_completed)
                        children=move |project| {
                            let id = project.id.clone();
                            let select_id = id.clone();
                            let toggle_id = id.clone();
                            let completed = project.is_completed;

                            let is_selected = {
                                let id = id.clone();
                                move || store.selected_project_id().get().as_deref() == Some(id.as_str())
                            };
                            let row_class = move || {
                                let mut c = String::from("project-row");
                                if is_selected() { c.push_str(" selected"); }
                                if completed { c.push_str(" completed"); }
                                c
                            };

                            view! {
                                <li
                                    class=row_class
                                    on:click=move |_| store.selected_project_id().set(Some(select_id.clone()))
                                >
                                    <input
                                        type="checkbox"
                                        checked=completed
                                        on:click=move |ev| ev.stop_propagation()
                                        on:change=move |_| {
                                            let next = !completed;
                                            // Optimistic flip; the round trip runs behind it
                                            store_set_completed(&store, &toggle_id, next);
                                            let project_id = toggle_id.clone();
                                            spawn_local(async move {
                                                match api::set_project_completed(&session, &project_id, next).await {
                                                    Ok(_) => {}
                                                    Err(ApiError::Unauthorized(_)) => session.logout(),
                                                    Err(err) => {
                                                        web_sys::console::error_1(&format!("Error toggling project completion: {err}").into());
                                                    }
                                                }
                                            });
                                        }
                                    />
                                    <span class="project-name">{project.name.clone()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
