//! fetchによるAPIクライアント
//!
//! すべてのリクエストにタイムアウトを付け、識別リクエストは
//! `AbortController` で中断できるようにする。

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FormData, Request, RequestInit, Response};
use florascan_common::request::{DESCRIPTION_FIELD, IMAGE_FIELD};
use florascan_common::{
    ApiRoutes, ClientConfig, Error, IdentifyRequest, IdentifyResponse, Plant, PlantApi,
    PlantSummary, Result, Stats,
};

/// fetch失敗の中身
enum FetchFailure {
    Js(JsValue),
    Status(u16),
}

impl From<JsValue> for FetchFailure {
    fn from(value: JsValue) -> Self {
        FetchFailure::Js(value)
    }
}

/// JSの例外を文字列化
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn js_error(value: JsValue) -> Error {
    Error::Network(js_message(&value))
}

/// ブラウザ用APIクライアント
///
/// JSオブジェクトを持たないのでイベントハンドラ間で自由にcloneできる。
#[derive(Debug, Clone)]
pub struct FetchClient {
    routes: ApiRoutes,
    timeout_ms: u32,
}

impl FetchClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            routes: ApiRoutes::new(config.base_url.clone()),
            timeout_ms: config.timeout_ms,
        }
    }

    /// 外部から中断できるクライアントを作る
    pub fn cancellable(&self, controller: AbortController) -> Cancellable<'_> {
        Cancellable { client: self, controller }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        body: Option<&JsValue>,
        controller: Option<&AbortController>,
    ) -> Result<T> {
        let controller = match controller {
            Some(c) => c.clone(),
            None => AbortController::new().map_err(js_error)?,
        };

        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body {
            opts.set_body(body);
        }
        opts.set_signal(Some(&controller.signal()));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

        // タイムアウトで中断。Timeoutはdropでキャンセルされる
        let timed_out = Rc::new(Cell::new(false));
        let _timeout = {
            let timed_out = timed_out.clone();
            let controller = controller.clone();
            Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let json = match fetch_json(&request).await {
            Ok(json) => json,
            Err(FetchFailure::Status(status)) => return Err(Error::Http { status }),
            Err(FetchFailure::Js(_)) if timed_out.get() => return Err(Error::Timeout),
            Err(FetchFailure::Js(_)) if controller.signal().aborted() => return Err(Error::Cancelled),
            Err(FetchFailure::Js(e)) => return Err(js_error(e)),
        };

        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
    }

    async fn identify_with(
        &self,
        request: IdentifyRequest<File>,
        controller: Option<&AbortController>,
    ) -> Result<IdentifyResponse> {
        let form = FormData::new().map_err(js_error)?;
        if let Some(file) = &request.image {
            form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
                .map_err(js_error)?;
        }
        if let Some(description) = &request.description {
            form.append_with_str(DESCRIPTION_FIELD, description)
                .map_err(js_error)?;
        }

        // Content-Typeはブラウザがboundary付きで設定する
        self.send("POST", &self.routes.identify(), Some(form.as_ref()), controller)
            .await
    }
}

async fn fetch_json(request: &Request) -> std::result::Result<JsValue, FetchFailure> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(FetchFailure::Status(resp.status()));
    }

    Ok(JsFuture::from(resp.json()?).await?)
}

impl PlantApi for FetchClient {
    type Image = File;

    async fn identify(&self, request: IdentifyRequest<File>) -> Result<IdentifyResponse> {
        self.identify_with(request, None).await
    }

    async fn list_plants(&self, limit: u32) -> Result<Vec<PlantSummary>> {
        self.send("GET", &self.routes.plants(limit), None, None).await
    }

    async fn plant(&self, id: u64) -> Result<Plant> {
        self.send("GET", &self.routes.plant(id), None, None).await
    }

    async fn stats(&self) -> Result<Stats> {
        self.send("GET", &self.routes.stats(), None, None).await
    }
}

/// 中断可能なクライアント
pub struct Cancellable<'a> {
    client: &'a FetchClient,
    controller: AbortController,
}

impl PlantApi for Cancellable<'_> {
    type Image = File;

    async fn identify(&self, request: IdentifyRequest<File>) -> Result<IdentifyResponse> {
        self.client.identify_with(request, Some(&self.controller)).await
    }

    async fn list_plants(&self, limit: u32) -> Result<Vec<PlantSummary>> {
        self.client
            .send("GET", &self.client.routes.plants(limit), None, Some(&self.controller))
            .await
    }

    async fn plant(&self, id: u64) -> Result<Plant> {
        self.client
            .send("GET", &self.client.routes.plant(id), None, Some(&self.controller))
            .await
    }

    async fn stats(&self) -> Result<Stats> {
        self.client
            .send("GET", &self.client.routes.stats(), None, Some(&self.controller))
            .await
    }
}
