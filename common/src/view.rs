//! 識別結果の表示モデル
//!
//! 応答から「何を表示するか」だけを決める純粋関数。
//! 描画そのもの（Leptosのview、CLIのテキスト）は各クレート側で行う。

use crate::types::{IdentifyResponse, Plant};

/// 候補の最大表示件数（超過分は表示しない）
pub const MAX_ALTERNATIVES: usize = 5;

/// 警告バナー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// 信頼できない結果（強い警告）
    InvalidResult,
    /// 確信度が低い（弱い警告）
    LowConfidence,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::InvalidResult => crate::messages::INVALID_TITLE,
            Notice::LowConfidence => crate::messages::LOW_CONFIDENCE_TITLE,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Notice::InvalidResult => crate::messages::INVALID_BODY,
            Notice::LowConfidence => crate::messages::LOW_CONFIDENCE_BODY,
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::InvalidResult => "invalid",
            Notice::LowConfidence => "low-confidence",
        }
    }
}

/// 候補1件
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeView {
    pub name: String,
    pub percent: i64,
}

/// 識別できた場合の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedView {
    pub notice: Option<Notice>,
    /// 「Best guess (not reliable)」ラベルを付けるか
    pub best_guess: bool,
    pub common_name: String,
    pub scientific_name: String,
    pub family: Option<String>,
    pub image_url: Option<String>,
    pub confidence_percent: i64,
    pub alternatives: Vec<AlternativeView>,
    pub description: Option<String>,
    pub native_to_philippines: bool,
    pub care_instructions: Option<String>,
}

impl IdentifiedView {
    /// 確信度バーの幅（0〜100にクランプ）
    pub fn bar_width(&self) -> i64 {
        self.confidence_percent.clamp(0, 100)
    }
}

/// 表示モデル
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// 植物を特定できなかった
    NotIdentified,
    Identified(Box<IdentifiedView>),
}

impl ResultView {
    /// 応答から表示モデルを作る
    pub fn from_response(response: &IdentifyResponse) -> Self {
        let Some(plant) = response.plant.as_ref() else {
            return ResultView::NotIdentified;
        };

        let invalid = response.invalid_result;
        let low = response.low_confidence;

        // invalidが優先。両方立っていても低確信度バナーは出さない
        let notice = if invalid {
            Some(Notice::InvalidResult)
        } else if low {
            Some(Notice::LowConfidence)
        } else {
            None
        };

        let alternatives = if invalid || low {
            response
                .alternatives
                .iter()
                .take(MAX_ALTERNATIVES)
                .map(|a| AlternativeView {
                    name: a.name.clone(),
                    percent: confidence_percent(a.confidence),
                })
                .collect()
        } else {
            Vec::new()
        };

        ResultView::Identified(Box::new(IdentifiedView {
            notice,
            best_guess: invalid,
            common_name: plant.common_name.clone(),
            scientific_name: plant.scientific_name.clone(),
            family: present(&plant.family),
            image_url: present(&plant.image_url),
            confidence_percent: confidence_percent(response.confidence),
            alternatives,
            description: present(&plant.description),
            native_to_philippines: plant.native_to_philippines,
            care_instructions: present(&plant.care_instructions),
        }))
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, ResultView::Identified(_))
    }
}

/// 0〜1の確信度を百分率に丸める（四捨五入）
///
/// NaNは0になる。
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0 + 0.5).floor() as i64
}

/// 空文字は未設定として扱う
pub(crate) fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// 植物の説明文（詳細ダイアログ用）
pub(crate) fn description_or_default(plant: &Plant) -> String {
    present(&plant.description).unwrap_or_else(|| crate::messages::NO_DESCRIPTION.to_string())
}
