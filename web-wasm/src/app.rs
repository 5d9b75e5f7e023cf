//! メインアプリケーションコンポーネント

use gloo::console;
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{AbortController, File, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use florascan_common::{
    Attempt, ClientConfig, IdentifyOutcome, IdentifySession, PlantApi, ResultView, run_identify,
};
use crate::api::FetchClient;
use crate::components::{
    ask_bar::AskBar,
    header::Header,
    plant_gallery::PlantGallery,
    result_card::ResultCard,
    upload_area::UploadArea,
};

/// 選択中の画像
#[derive(Clone)]
pub struct SelectedFile {
    /// 選択ごとに増える連番（プレビューの取り違え防止）
    pub id: u64,
    pub name: String,
    pub file: File,
    pub preview: Option<String>,
}

/// 画面の状態
///
/// `App` が所有し、各コンポーネントにはコピーを渡す。
#[derive(Clone, Copy)]
pub struct UiState {
    pub selection: RwSignal<Option<SelectedFile>, LocalStorage>,
    pub description: RwSignal<String>,
    pub session: RwSignal<IdentifySession>,
    pub result: RwSignal<Option<ResultView>>,
    /// 応答待ちの識別リクエスト
    pending: StoredValue<Option<AbortController>, LocalStorage>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new_local(None),
            description: RwSignal::new(String::new()),
            session: RwSignal::new(IdentifySession::new()),
            result: RwSignal::new(None),
            pending: StoredValue::new_local(None),
        }
    }

    /// 選択を丸ごと差し替え、新しい選択IDを返す
    pub fn select_file(&self, file: File) -> u64 {
        let id = self
            .selection
            .with_untracked(|s| s.as_ref().map_or(1, |s| s.id + 1));
        self.selection.set(Some(SelectedFile {
            id,
            name: file.name(),
            file,
            preview: None,
        }));
        id
    }

    /// プレビューを反映（選択が変わっていたら捨てる）
    pub fn set_preview(&self, id: u64, data_url: String) {
        self.selection.update(|s| {
            if let Some(selected) = s.as_mut().filter(|s| s.id == id) {
                selected.preview = Some(data_url);
            }
        });
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(IdentifySession::is_loading)
    }

    /// 新しいリクエストを登録し、前のリクエストを中断する
    pub fn replace_pending(&self, controller: AbortController) {
        self.pending.update_value(|pending| {
            if let Some(previous) = pending.replace(controller) {
                previous.abort();
            }
        });
    }

    /// 最新のリクエストが完了したので登録を外す
    pub fn finish_pending(&self) {
        self.pending.set_value(None);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// 識別トリガー
///
/// 入力不足ならアラートのみ。送信中は新しい世代で前のリクエストを置き換え、
/// 最新の応答だけを結果に反映する。
pub fn trigger_identify(state: UiState, client: FetchClient) {
    let description = state.description.get_untracked();
    let image = state
        .selection
        .with_untracked(|s| s.as_ref().map(|s| s.file.clone()));

    let controller = match AbortController::new() {
        Ok(controller) => controller,
        Err(e) => {
            console::error!("Error:", e);
            alert(florascan_common::messages::IDENTIFY_FAILED);
            return;
        }
    };

    spawn_local(async move {
        let api = client.cancellable(controller.clone());
        let attempt = run_identify(
            &api,
            &description,
            image,
            || {
                state.replace_pending(controller);
                state.session.write().begin()
            },
            |token| state.session.write().settle(token),
        )
        .await;

        match attempt {
            Attempt::Rejected(e) => alert(e.user_message()),
            Attempt::Applied(outcome) => {
                state.finish_pending();
                match outcome {
                    IdentifyOutcome::Rendered(view) => state.result.set(Some(view)),
                    IdentifyOutcome::Failed(e) => {
                        console::error!("Error:", e.to_string());
                        alert(e.user_message());
                    }
                }
            }
            Attempt::Discarded => console::debug!("Discarded a superseded identification response"),
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let state = UiState::new();
    let client = FetchClient::new(&config);
    let show_gallery = config.gallery;

    // 統計は取得してログに出すだけ
    {
        let client = client.clone();
        spawn_local(async move {
            match client.stats().await {
                Ok(stats) => console::log!(
                    "Application stats:",
                    stats_json(&stats)
                ),
                Err(e) => console::error!("Error loading stats:", e.to_string()),
            }
        });
    }

    let submit = {
        let client = client.clone();
        move || trigger_identify(state, client.clone())
    };

    let results_ref = NodeRef::<leptos::html::Section>::new();

    // 識別できたときだけスクロール
    Effect::new(move |_| {
        if state.result.with(|r| r.as_ref().is_some_and(ResultView::is_identified)) {
            if let Some(section) = results_ref.get() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    view! {
        <div class="container">
            <Header />

            <section class="identify-panel">
                <UploadArea state=state on_selected=submit.clone() />
                <AskBar state=state on_submit=submit />
            </section>

            <Show when=move || state.result.with(Option::is_some)>
                <section class="results-section" id="resultsSection" node_ref=results_ref>
                    <div id="resultContent">
                        {move || state.result.get().map(|view| view! { <ResultCard result=view /> })}
                    </div>
                </section>
            </Show>

            <Show when=move || show_gallery>
                <PlantGallery client=client.clone() />
            </Show>
        </div>
    }
}

fn stats_json(stats: &florascan_common::Stats) -> String {
    serde_json::Value::Object(stats.clone()).to_string()
}
