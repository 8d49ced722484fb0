//! Signup Page
//!
//! Account creation form; a successful registration also signs the user in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            set_error.set("Please fill in all fields.".to_string());
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.register(&name_value, &email_value, &password_value).await {
                Ok(()) => navigate("/", Default::default()),
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create an Account"</h2>

                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />

                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>

                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Log In"</A>
                </p>
            </div>
        </div>
    }
}
