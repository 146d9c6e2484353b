//! Contributor profile card

use leptos::*;
use middleframe::User;

#[component]
pub fn ProfileSection(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] photo_count: Signal<usize>,
) -> impl IntoView {
    let username = move || user.get().map(|u| u.username).unwrap_or_default();
    let email = move || user.get().map(|u| u.email).unwrap_or_default();
    let role = move || user.get().map(|u| u.role.to_string()).unwrap_or_default();
    let initial = move || {
        user.get()
            .and_then(|u| u.initial())
            .map(String::from)
            .unwrap_or_default()
    };

    view! {
        <div class="profile-section">
            <div class="profile-info">
                <span class="eyebrow">"Contributor Profile"</span>
                <h1>{username}</h1>
                <div class="profile-facts">
                    <div class="fact">
                        <span class="fact-label">"Email"</span>
                        <span class="fact-value">{email}</span>
                    </div>
                    <div class="fact">
                        <span class="fact-label">"Role"</span>
                        <span class="fact-value role-badge">{role}</span>
                    </div>
                    <div class="fact">
                        <span class="fact-label">"Archive Stats"</span>
                        <span class="fact-value">
                            {move || format!("{} Frames Contributed", photo_count.get())}
                        </span>
                    </div>
                </div>
            </div>
            <div class="profile-avatar">{initial}</div>
        </div>
    }
}
