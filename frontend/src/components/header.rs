//! Top navigation bar.

use leptos::*;
use middleframe::User;

use crate::config::LOGO_TEXT;
use crate::services::{alert, browser_session, navigate_to};
use crate::types::{ActiveView, ViewerRole};

#[component]
pub fn Header(
    user: ReadSignal<Option<User>>,
    active_view: ReadSignal<ActiveView>,
    set_active_view: WriteSignal<ActiveView>,
    #[prop(into)] viewer_role: Signal<ViewerRole>,
    on_upload: Callback<()>,
) -> impl IntoView {
    let is_uploader = move || user.get().map(|u| u.is_uploader()).unwrap_or(false);
    let can_upload = move || viewer_role.get() == ViewerRole::Photographer && user.get().is_some();

    let on_logout = move |_| {
        if let Err(e) = browser_session().clear() {
            log::error!("Failed to clear session: {}", e);
            alert(&e.to_string());
            return;
        }
        log::info!("Signed out");
        navigate_to("/login");
    };

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">{LOGO_TEXT}<span class="logo-dot">"."</span></a>
            </div>
            <div class="header-right">
                <div class="view-switch">
                    <button
                        class="switch-option"
                        class:active=move || active_view.get() == ActiveView::Marketplace
                        on:click=move |_| set_active_view.set(ActiveView::Marketplace)
                    >
                        "Explore"
                    </button>
                    <Show when=is_uploader fallback=|| ()>
                        <button
                            class="switch-option"
                            class:active=move || active_view.get() == ActiveView::Profile
                            on:click=move |_| set_active_view.set(ActiveView::Profile)
                        >
                            "Profile"
                        </button>
                    </Show>
                </div>
                <nav class="account">
                    {move || match user.get() {
                        Some(current) => view! {
                            <div class="active-user">
                                <span class="active-label">"Active"</span>
                                <span class="active-name">{current.username}</span>
                            </div>
                            <button class="logout" on:click=on_logout>"Logout"</button>
                        }.into_view(),
                        None => view! {
                            <a href="/login" class="sign-in">"Sign In"</a>
                            <a href="/register" class="join">"Join Marketplace"</a>
                        }.into_view(),
                    }}
                </nav>
                <Show when=can_upload fallback=|| ()>
                    <button
                        class="upload-button"
                        title="Upload Photo"
                        on:click=move |_| on_upload.call(())
                    >
                        "+"
                    </button>
                </Show>
            </div>
        </header>
    }
}
