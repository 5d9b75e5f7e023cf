//! reqwestによるAPIクライアント

use crate::error::Result;
use crate::image_file::ImageFile;
use florascan_common::request::{DESCRIPTION_FIELD, IMAGE_FIELD};
use florascan_common::{
    ApiRoutes, Error, IdentifyRequest, IdentifyResponse, Plant, PlantApi, PlantSummary, Stats,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    http: reqwest::Client,
    routes: ApiRoutes,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            routes: ApiRoutes::new(base_url),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> florascan_common::Result<T> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        read_json(response).await
    }
}

/// reqwestのエラーを共通エラーに変換
fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else {
        Error::Network(e.to_string())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> florascan_common::Result<T> {
    let status = response.status();
    if !status.is_success() {
        debug!("HTTP status {}", status);
        return Err(Error::Http {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(transport_error)?;
    Ok(serde_json::from_slice(&body)?)
}

impl PlantApi for HttpClient {
    type Image = ImageFile;

    async fn identify(&self, request: IdentifyRequest<ImageFile>) -> florascan_common::Result<IdentifyResponse> {
        let mut form = Form::new();

        if let Some(image) = request.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(image.mime_type)
                .map_err(transport_error)?;
            form = form.part(IMAGE_FIELD, part);
        }

        if let Some(description) = request.description {
            form = form.text(DESCRIPTION_FIELD, description);
        }

        let url = self.routes.identify();
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn list_plants(&self, limit: u32) -> florascan_common::Result<Vec<PlantSummary>> {
        self.get_json(&self.routes.plants(limit)).await
    }

    async fn plant(&self, id: u64) -> florascan_common::Result<Plant> {
        self.get_json(&self.routes.plant(id)).await
    }

    async fn stats(&self) -> florascan_common::Result<Stats> {
        self.get_json(&self.routes.stats()).await
    }
}
