//! APIレスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IdentifyResponse: `POST /api/identify` の応答
//! - Plant: 植物の詳細レコード
//! - PlantSummary: ギャラリー用の植物一覧要素
//! - Stats: `GET /api/stats` の応答（中身は解釈しない）

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 植物レコード（識別結果・詳細取得で共通）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub common_name: String,

    #[serde(default)]
    pub scientific_name: String,

    #[serde(default)]
    pub family: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// バックエンドによっては 0/1 で返るため真偽値として緩く解釈する
    #[serde(default, deserialize_with = "truthy")]
    pub native_to_philippines: bool,

    #[serde(default)]
    pub care_instructions: Option<String>,
}

/// 候補（次点）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub confidence: f64,
}

/// 識別API応答
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifyResponse {
    #[serde(default)]
    pub plant: Option<Plant>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub confidence: f64,

    #[serde(default, deserialize_with = "strictly_true")]
    pub low_confidence: bool,

    #[serde(default, deserialize_with = "strictly_true")]
    pub invalid_result: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub alternatives: Vec<Alternative>,
}

/// ギャラリー用の植物
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantSummary {
    pub id: u64,

    #[serde(default)]
    pub common_name: String,

    #[serde(default)]
    pub scientific_name: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// 統計情報（表示はせず、そのまま保持する）
pub type Stats = serde_json::Map<String, Value>;

/// JSの真偽判定に合わせた緩いbool
fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// `true` のときだけ真（null や他の型は偽）
fn strictly_true<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// null を空配列として読む
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// null を 0.0 として読む
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_response_deserialize_full() {
        let json = r#"{
            "plant": {
                "id": 3,
                "common_name": "Sampaguita",
                "scientific_name": "Jasminum sambac",
                "family": "Oleaceae",
                "native_to_philippines": true
            },
            "confidence": 0.91,
            "low_confidence": false,
            "alternatives": [{"name": "Kamuning", "confidence": 0.05}]
        }"#;

        let response: IdentifyResponse = serde_json::from_str(json).expect("パース失敗");
        let plant = response.plant.expect("plantがない");
        assert_eq!(plant.id, Some(3));
        assert_eq!(plant.common_name, "Sampaguita");
        assert_eq!(plant.family.as_deref(), Some("Oleaceae"));
        assert!(plant.native_to_philippines);
        assert_eq!(response.confidence, 0.91);
        assert!(!response.invalid_result);
        assert_eq!(response.alternatives.len(), 1);
    }

    #[test]
    fn test_identify_response_minimal() {
        // plantなし・フラグなし
        let response: IdentifyResponse = serde_json::from_str(r#"{"plant": null, "confidence": null}"#).unwrap();
        assert!(response.plant.is_none());
        assert_eq!(response.confidence, 0.0);
        assert!(!response.low_confidence);
        assert!(response.alternatives.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"confidence": 0.5, "model_version": "v2", "plant": {"common_name": "Narra", "extra": 1}}"#;
        let response: IdentifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.plant.unwrap().common_name, "Narra");
    }

    #[test]
    fn test_native_flag_accepts_integers() {
        let plant: Plant = serde_json::from_str(r#"{"native_to_philippines": 1}"#).unwrap();
        assert!(plant.native_to_philippines);

        let plant: Plant = serde_json::from_str(r#"{"native_to_philippines": 0}"#).unwrap();
        assert!(!plant.native_to_philippines);

        let plant: Plant = serde_json::from_str(r#"{"native_to_philippines": null}"#).unwrap();
        assert!(!plant.native_to_philippines);
    }

    #[test]
    fn test_null_flags_read_as_false() {
        let json = r#"{"plant": {"common_name": "Narra"}, "confidence": 0.9, "low_confidence": null, "invalid_result": null}"#;
        let response: IdentifyResponse = serde_json::from_str(json).expect("nullフラグで失敗");
        assert!(!response.low_confidence);
        assert!(!response.invalid_result);
        assert!(response.plant.is_some());
    }

    #[test]
    fn test_flags_only_true_counts() {
        // 文字列や数値は true 扱いしない
        let json = r#"{"low_confidence": "yes", "invalid_result": 1}"#;
        let response: IdentifyResponse = serde_json::from_str(json).unwrap();
        assert!(!response.low_confidence);
        assert!(!response.invalid_result);

        let json = r#"{"low_confidence": true, "invalid_result": false}"#;
        let response: IdentifyResponse = serde_json::from_str(json).unwrap();
        assert!(response.low_confidence);
        assert!(!response.invalid_result);
    }

    #[test]
    fn test_null_alternatives_read_as_empty() {
        let json = r#"{"plant": {"common_name": "Narra"}, "confidence": 0.4, "low_confidence": true, "alternatives": null}"#;
        let response: IdentifyResponse = serde_json::from_str(json).expect("null候補で失敗");
        assert!(response.low_confidence);
        assert!(response.alternatives.is_empty());
    }

    #[test]
    fn test_plant_summary_list() {
        let json = r#"[
            {"id": 1, "common_name": "Narra", "scientific_name": "Pterocarpus indicus", "image_url": "/img/narra.jpg"},
            {"id": 2, "common_name": "Molave", "scientific_name": "Vitex parviflora"}
        ]"#;
        let plants: Vec<PlantSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].image_url.as_deref(), Some("/img/narra.jpg"));
        assert!(plants[1].image_url.is_none());
    }
}
