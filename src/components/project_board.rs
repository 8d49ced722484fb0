//! Project Board Component
//!
//! Owns the live task sequence for the selected project. Every mutation
//! is applied locally first, then committed as a full-list overwrite;
//! whichever racing commit resolves last wins on the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::*;

use crate::api::{self, ApiError};
use crate::components::{DeleteConfirmButton, TaskRow};
use crate::context::AppContext;
use crate::models::{Project, Task};
use crate::session::use_session;
use crate::store::{store_remove_project, store_update_project, use_app_store};
use crate::tasks;

#[component]
pub fn ProjectBoard(selected_project: Memo<Option<Project>>) -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (board_tasks, set_board_tasks) = signal(Vec::<Task>::new());
    let (seeded_id, set_seeded_id) = signal::<Option<String>>(None);

    // Seed when the board starts showing a different project, or when a
    // directory fetch lands. A commit response for the same project must
    // not clobber newer local edits, so it never reseeds.
    Effect::new(move |prev_epoch: Option<u32>| {
        let epoch = ctx.directory_epoch.get();
        match selected_project.get() {
            Some(project) => {
                let identity_changed =
                    seeded_id.get_untracked().as_deref() != Some(project.id.as_str());
                let directory_refreshed = prev_epoch.is_some_and(|prev| prev != epoch);
                if identity_changed || directory_refreshed {
                    if identity_changed {
                        ctx.clear_commit_error();
                    }
                    set_seeded_id.set(Some(project.id.clone()));
                    set_board_tasks.set(project.tasks);
                }
            }
            None => set_seeded_id.set(None),
        }
        epoch
    });

    // Optimistic commit: local state synchronously, then the overwrite
    // request. No rollback on failure; the banner plus a manual refresh
    // reconcile instead.
    let commit_tasks = move |next: Vec<Task>| {
        let Some(project) = selected_project.get_untracked() else { return };
        set_board_tasks.set(next.clone());
        spawn_local(async move {
            match api::update_project_tasks(&session, &project.id, &next).await {
                Ok(updated) => {
                    store_update_project(&store, updated);
                    ctx.clear_commit_error();
                }
                Err(ApiError::Unauthorized(_)) => session.logout(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Error updating tasks: {err}").into());
                    ctx.report_commit_error(format!(
                        "Saving \"{}\" failed. Changes shown here may not be stored.",
                        project.name
                    ));
                }
            }
        });
    };

    // DnD: resolve both rows by id at drop time, then it is a pure move
    let sort = create_sort_signals();
    bind_global_mouseup(sort, move |dragged_id, target_id| {
        web_sys::console::log_1(&format!("[BOARD] drop {dragged_id} onto {target_id}").into());
        let current = board_tasks.get_untracked();
        let from = current.iter().position(|t| t.id == dragged_id);
        let to = current.iter().position(|t| t.id == target_id);
        if let (Some(from), Some(to)) = (from, to) {
            if let Some(next) = tasks::move_task(&current, from, to) {
                commit_tasks(next);
            }
        }
    });

    let on_add = move |_| commit_tasks(tasks::push_new(&board_tasks.get_untracked()));

    let on_task_change = Callback::new(move |updated: Task| {
        commit_tasks(tasks::replace_task(&board_tasks.get_untracked(), &updated));
    });

    let on_task_delete = Callback::new(move |task_id: String| {
        commit_tasks(tasks::remove_task(&board_tasks.get_untracked(), &task_id));
    });

    let delete_project = Callback::new(move |_: ()| {
        let Some(project) = selected_project.get_untracked() else { return };
        spawn_local(async move {
            match api::delete_project(&session, &project.id).await {
                Ok(()) => {
                    store_remove_project(&store, &project.id);
                    ctx.reload();
                }
                Err(ApiError::Unauthorized(_)) => session.logout(),
                Err(err) => {
                    web_sys::console::error_1(&format!("Error deleting project: {err}").into());
                    ctx.report_commit_error(format!(
                        "Failed to delete \"{}\". The project was left untouched.",
                        project.name
                    ));
                }
            }
        });
    });

    view! {
        <Show
            when=move || selected_project.get().is_some()
            fallback=|| view! {
                <div class="board-placeholder">
                    <p>"Select a project to view its tasks."</p>
                </div>
            }
        >
            <div class="project-board">
                <div class="board-header">
                    <h2>{move || selected_project.get().map(|p| p.name).unwrap_or_default()}</h2>
                    <DeleteConfirmButton
                        button_class="project-delete-btn"
                        label="Delete Project"
                        on_confirm=delete_project
                    />
                </div>

                <Show when=move || ctx.commit_error.get().is_some()>
                    <div class="commit-error-banner">
                        <span>{move || ctx.commit_error.get().unwrap_or_default()}</span>
                        <button
                            class="refresh-btn"
                            on:click=move |_| {
                                ctx.clear_commit_error();
                                ctx.reload();
                            }
                        >
                            "Refresh"
                        </button>
                    </div>
                </Show>

                <div class="task-list">
                    <For
                        each=move || board_tasks.get()
                        key=|task| task.id.clone()
                        children=move |task| {
                            let id = task.id.clone();

                            // Rows are keyed by id alone so edits and drags
                            // never remount them; each row follows its task
                            // through this memo instead.
                            let row_task = {
                                let id = id.clone();
                                Memo::new(move |_| {
                                    board_tasks.get().into_iter().find(|t| t.id == id)
                                })
                            };

                            let on_mousedown = make_on_mousedown(sort, id.clone());
                            let on_mouseenter = make_on_row_mouseenter(sort, id.clone());
                            let on_mouseleave = make_on_mouseleave(sort);

                            let is_dragging = {
                                let id = id.clone();
                                move || sort.dragging_read.get().as_deref() == Some(id.as_str())
                            };
                            let is_drop_target = {
                                let id = id.clone();
                                move || sort.target_read.get().as_deref() == Some(id.as_str())
                            };
                            let slot_class = move || {
                                let mut c = String::from("task-slot");
                                if is_dragging() { c.push_str(" dragging"); }
                                if is_drop_target() { c.push_str(" drop-target"); }
                                c
                            };

                            view! {
                                <div
                                    class=slot_class
                                    on:mousedown=on_mousedown
                                    on:mouseenter=on_mouseenter
                                    on:mouseleave=on_mouseleave
                                >
                                    <TaskRow
                                        task=row_task
                                        on_change=on_task_change
                                        on_delete=on_task_delete
                                    />
                                </div>
                            }
                        }
                    />
                </div>

                <button class="add-task-btn" on:click=on_add>"+ Add Custom Task"</button>
            </div>
        </Show>
    }
}
