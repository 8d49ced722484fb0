//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the project directory - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Bumped after each directory fetch lands; the board reconciles on it - read
    pub directory_epoch: ReadSignal<u32>,
    set_directory_epoch: WriteSignal<u32>,
    /// Message from the most recent failed commit - read
    pub commit_error: ReadSignal<Option<String>>,
    set_commit_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        directory_epoch: (ReadSignal<u32>, WriteSignal<u32>),
        commit_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            directory_epoch: directory_epoch.0,
            set_directory_epoch: directory_epoch.1,
            commit_error: commit_error.0,
            set_commit_error: commit_error.1,
        }
    }

    /// Trigger a refetch of the project directory
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Mark that a directory fetch has landed
    pub fn mark_directory_loaded(&self) {
        self.set_directory_epoch.update(|v| *v += 1);
    }

    /// Record a failed commit; cleared by the next successful one
    pub fn report_commit_error(&self, message: String) {
        self.set_commit_error.set(Some(message));
    }

    pub fn clear_commit_error(&self) {
        self.set_commit_error.set(None);
    }
}
