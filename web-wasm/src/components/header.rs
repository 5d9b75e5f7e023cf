//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌿 FloraScan"</h1>
            <p class="text-muted">"Identify plants from a photo or a short description"</p>
        </header>
    }
}
