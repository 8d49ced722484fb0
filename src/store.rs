//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Project;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects owned by the signed-in user
    pub projects: Vec<Project>,
    /// Identity of the project shown on the board
    pub selected_project_id: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a project in the store by id
pub fn store_update_project(store: &AppStore, updated: Project) {
    store.projects().write().iter_mut()
        .find(|p| p.id == updated.id)
        .map(|p| *p = updated);
}

/// Remove a project by id, dropping any selection still pointing at it
pub fn store_remove_project(store: &AppStore, project_id: &str) {
    store.projects().write().retain(|p| p.id != project_id);
    if store.selected_project_id().get_untracked().as_deref() == Some(project_id) {
        store.selected_project_id().set(None);
    }
}

/// Newly created projects go to the front of the directory
pub fn store_insert_project(store: &AppStore, project: Project) {
    store.projects().write().insert(0, project);
}

/// Flip a project's completion flag; its task sequence is untouched
pub fn store_set_completed(store: &AppStore, project_id: &str, completed: bool) {
    store.projects().write().iter_mut()
        .find(|p| p.id == project_id)
        .map(|p| *p = p.with_completed(completed));
}
