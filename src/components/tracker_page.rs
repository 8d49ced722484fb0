//! Project Tracker Page
//!
//! Main authenticated view: project directory on the left, task board on
//! the right, and the new-project modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::api::{self, ApiError};
use crate::components::{NewProjectModal, ProjectBoard, ProjectList};
use crate::context::AppContext;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TrackerPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (modal_open, set_modal_open) = signal(false);

    // Fetch the directory while a credential is held; refetch on the
    // reload trigger. An unauthorized response forces logout, and the
    // Show guard below takes care of the redirect.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if !session.is_authenticated() {
            return;
        }
        spawn_local(async move {
            match api::list_projects(&session).await {
                Ok(projects) => {
                    *store.projects().write() = projects;
                    ctx.mark_directory_loaded();
                }
                Err(ApiError::Unauthorized(_)) => session.logout(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Error fetching projects: {err}").into());
                }
            }
        });
    });

    let on_logout = move |_| {
        session.logout();
        *store.projects().write() = Vec::new();
        store.selected_project_id().set(None);
    };

    // Selection is resolved against the latest list on every render, so a
    // project deleted out from under us cannot leave the board dangling.
    let selected_project = Memo::new(move |_| {
        let id = store.selected_project_id().get()?;
        store.projects().get().into_iter().find(|p| p.id == id)
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <div class="tracker-page">
                <header class="tracker-header">
                    <h1>"My Projects"</h1>
                    <div class="tracker-header-right">
                        {move || session.user().map(|user| view! {
                            <span class="user-greeting">{format!("Hey, {}!", user.name)}</span>
                        })}
                        <button class="logout-btn" on:click=on_logout>"Logout"</button>
                    </div>
                </header>

                <div class="tracker-grid">
                    <div class="tracker-sidebar">
                        <button class="new-project-btn" on:click=move |_| set_modal_open.set(true)>
                            "+ New Project"
                        </button>
                        <ProjectList/>
                    </div>

                    <div class="tracker-main">
                        <ProjectBoard selected_project=selected_project/>
                    </div>
                </div>

                <Show when=move || modal_open.get()>
                    <NewProjectModal set_open=set_modal_open/>
                </Show>
            </div>
        </Show>
    }
}
