//! Sign-in page.

use leptos::*;
use middleframe::{complete_login, LoginRequest};

use crate::config::LOGO_TEXT;
use crate::services::{browser_session, navigate_to, Gateway};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (is_loading, set_is_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_is_loading.set(true);
        set_error.set(None);

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            let response = Gateway::default().login(&request).await;
            match complete_login(&browser_session(), response) {
                Ok(user) => {
                    log::info!("Signed in as {}", user.username);
                    navigate_to("/");
                }
                Err(e) => {
                    log::warn!("Sign-in failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <a href="/" class="logo">{LOGO_TEXT}<span class="logo-dot">"."</span></a>
            <h2>"Welcome back"</h2>
            <p class="subtitle">"Access your photography dashboard"</p>

            <div class="auth-card">
                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        required
                        placeholder="name@example.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        required
                        placeholder="••••••••"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Authenticating..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "New to the platform? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
