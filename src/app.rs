//! Project Tracker App
//!
//! Root component: session and store setup plus the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{LoginPage, SignupPage, TrackerPage};
use crate::context::AppContext;
use crate::session::Session;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Session first: it is restored from storage before anything renders
    provide_context(Session::restore());
    provide_context::<AppStore>(Store::new(AppState::default()));

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (directory_epoch, set_directory_epoch) = signal(0u32);
    let (commit_error, set_commit_error) = signal::<Option<String>>(None);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (directory_epoch, set_directory_epoch),
        (commit_error, set_commit_error),
    ));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="route-fallback">"Page not found."</p> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/") view=TrackerPage/>
            </Routes>
        </Router>
    }
}
