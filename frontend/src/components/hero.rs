//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-status">
                <span class="status-dot live"></span>
                <span class="status-label">"Marketplace Live"</span>
            </div>
            <h1>
                "Where photographers"
                <span class="hero-accent">"share their vision."</span>
            </h1>
            <p class="subtitle">
                "Upload your best work. Build curated collections. "
                "Connect with buyers seeking authentic, high-quality imagery for their projects."
            </p>
            <div class="hero-features">
                <span class="feature">"High-Resolution Downloads"</span>
                <span class="feature">"Curated Collections"</span>
                <span class="feature">"Watermark Protection"</span>
            </div>
        </div>
    }
}
