//! バックエンドAPIのエンドポイントとクライアントtrait

use crate::error::Result;
use crate::request::IdentifyRequest;
use crate::types::{IdentifyResponse, Plant, PlantSummary, Stats};

/// ギャラリーに表示する件数
pub const GALLERY_LIMIT: u32 = 5;

/// エンドポイントURLの組み立て
///
/// `base_url` が空の場合は同一オリジンの相対パスになる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRoutes {
    base_url: String,
}

impl ApiRoutes {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn identify(&self) -> String {
        format!("{}/api/identify", self.base_url)
    }

    pub fn plants(&self, limit: u32) -> String {
        format!("{}/api/plants?limit={}", self.base_url, limit)
    }

    pub fn plant(&self, id: u64) -> String {
        format!("{}/api/plants/{}", self.base_url, id)
    }

    pub fn stats(&self) -> String {
        format!("{}/api/stats", self.base_url)
    }
}

/// バックエンドAPIクライアント
///
/// ブラウザ（fetch）とCLI（reqwest）の両方が実装する。
#[allow(async_fn_in_trait)]
pub trait PlantApi {
    /// 画像の表現
    type Image;

    /// `POST /api/identify`
    async fn identify(&self, request: IdentifyRequest<Self::Image>) -> Result<IdentifyResponse>;

    /// `GET /api/plants?limit=N`
    async fn list_plants(&self, limit: u32) -> Result<Vec<PlantSummary>>;

    /// `GET /api/plants/{id}`
    async fn plant(&self, id: u64) -> Result<Plant>;

    /// `GET /api/stats`
    async fn stats(&self) -> Result<Stats>;
}
