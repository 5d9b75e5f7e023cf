//! 説明文入力と識別ボタン

use leptos::prelude::*;
use florascan_common::messages::{ANALYZING_LABEL, ASK_LABEL};
use crate::app::UiState;

#[component]
pub fn AskBar<F>(
    state: UiState,
    on_submit: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let is_loading = move || state.is_loading();

    view! {
        <div class="ask-bar">
            <input
                type="text"
                id="plantDescription"
                placeholder="Describe the plant (leaf shape, flower color, where you found it)..."
                prop:value=move || state.description.get()
                on:input=move |ev| {
                    state.description.set(event_target_value(&ev));
                }
                on:keypress={
                    let on_submit = on_submit.clone();
                    move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_submit();
                        }
                    }
                }
            />
            <button
                class="btn btn-primary"
                id="askButton"
                disabled=is_loading
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit()
                }
            >
                {move || if is_loading() {
                    view! { <span class="loading"></span>" "{ANALYZING_LABEL} }.into_any()
                } else {
                    ASK_LABEL.into_any()
                }}
            </button>
        </div>
    }
}
