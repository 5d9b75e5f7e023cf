//! アップロードエリアコンポーネント
//!
//! ファイルを選ぶと選択を差し替え、プレビューを非同期で読み込み、
//! そのまま識別を開始する。形式・サイズのチェックはしない。

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};
use crate::app::UiState;

#[component]
pub fn UploadArea<F>(
    state: UiState,
    on_selected: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_click = move |_| {
        // 隠しinputのファイル選択ダイアログを開く
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let id = state.select_file(file.clone());
        console::log!("File selected:", file.name());
        read_preview(&file, move |data_url| state.set_preview(id, data_url));

        on_selected();
    };

    let preview = move || {
        state
            .selection
            .with(|s| s.as_ref().and_then(|s| s.preview.clone()))
    };
    let file_name = move || state.selection.with(|s| s.as_ref().map(|s| s.name.clone()));

    view! {
        <div class="upload-area" id="photoUploadArea" on:click=on_click>
            <input
                type="file"
                id="photoInput"
                accept="image/*"
                style="display: none;"
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <Show
                when=move || preview().is_some()
                fallback=|| view! {
                    <div class="upload-placeholder" id="uploadPlaceholder">
                        <div class="upload-icon">"📷"</div>
                        <p>"Click to upload a plant photo"</p>
                        <p class="text-muted">"JPEG, PNG or any image your camera takes"</p>
                    </div>
                }
            >
                <img
                    class="preview-image"
                    id="previewImage"
                    src=move || preview().unwrap_or_default()
                    alt=move || file_name().unwrap_or_default()
                />
            </Show>
        </div>
    }
}

/// ファイルをData URLとして読み込み、完了時に `on_loaded` を呼ぶ
fn read_preview<F>(file: &File, on_loaded: F)
where
    F: FnOnce(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            console::error!("Error creating FileReader:", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(data_url);
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        console::error!("Error reading file:", e);
    }
}
