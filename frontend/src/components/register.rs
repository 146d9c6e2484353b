//! Account creation page.

use leptos::*;
use middleframe::{complete_login, RegisterRequest, Role};

use crate::config::LOGO_TEXT;
use crate::services::{browser_session, navigate_to, Gateway};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(Role::Buyer);
    let (is_loading, set_is_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_is_loading.set(true);
        set_error.set(None);

        let request = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };

        spawn_local(async move {
            let response = Gateway::default().register(&request).await;
            match complete_login(&browser_session(), response) {
                Ok(user) => {
                    log::info!("Registered {} as {}", user.username, user.role);
                    navigate_to("/");
                }
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_is_loading.set(false);
        });
    };

    let role_option = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-option"
                class:active=move || role.get() == value
                on:click=move |_| set_role.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <a href="/" class="logo">{LOGO_TEXT}<span class="logo-dot">"."</span></a>
            <h2>"Join the marketplace"</h2>
            <p class="subtitle">"Share your frames or license them for your projects"</p>

            <div class="auth-card">
                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        required
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        required
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label>"I am a"</label>
                    <div class="role-switch">
                        {role_option(Role::Uploader, "Photographer")}
                        {role_option(Role::Buyer, "Buyer")}
                    </div>
                    <button type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already a member? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
