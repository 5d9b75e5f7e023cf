//! 植物ギャラリーの表示モデル

use crate::error::Result;
use crate::messages;
use crate::types::{Plant, PlantSummary};
use crate::view::description_or_default;

/// 画像なしカードの背景
const PLACEHOLDER_STYLE: &str = "background-color: #e0e0e0;";

/// ギャラリーのカード
#[derive(Debug, Clone, PartialEq)]
pub struct PlantCard {
    pub id: u64,
    pub common_name: String,
    pub scientific_name: String,
    /// `.plant-photo` に当てるinline style
    pub photo_style: String,
}

impl From<&PlantSummary> for PlantCard {
    fn from(plant: &PlantSummary) -> Self {
        let photo_style = match plant.image_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => format!("background-image: url('{}');", url.replace('\'', "%27")),
            None => PLACEHOLDER_STYLE.to_string(),
        };

        Self {
            id: plant.id,
            common_name: plant.common_name.clone(),
            scientific_name: plant.scientific_name.clone(),
            photo_style,
        }
    }
}

/// ギャラリーの状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GalleryState {
    #[default]
    Loading,
    Empty,
    Failed,
    Loaded(Vec<PlantCard>),
}

impl GalleryState {
    /// 一覧取得結果から状態を作る（最大 `limit` 件、受信順）
    pub fn from_result(result: &Result<Vec<PlantSummary>>, limit: usize) -> Self {
        match result {
            Err(_) => GalleryState::Failed,
            Ok(plants) if plants.is_empty() => GalleryState::Empty,
            Ok(plants) => GalleryState::Loaded(
                plants
                    .iter()
                    .take(limit)
                    .map(PlantCard::from)
                    .collect(),
            ),
        }
    }

    /// 空・失敗時に表示する文言
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GalleryState::Empty => Some(messages::NO_PLANTS),
            GalleryState::Failed => Some(messages::PLANTS_FAILED),
            GalleryState::Loading | GalleryState::Loaded(_) => None,
        }
    }

    pub fn cards(&self) -> &[PlantCard] {
        match self {
            GalleryState::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

/// 詳細ダイアログの本文
pub fn detail_message(plant: &Plant) -> String {
    format!(
        "{}\n{}\n\n{}",
        plant.common_name,
        plant.scientific_name,
        description_or_default(plant)
    )
}
