//! ブラウザ側クライアントの設定
//!
//! `<body data-api-base="..." data-timeout-ms="..." data-gallery="...">` から読む。
//! 値がない・不正な場合はデフォルト。

/// 識別リクエストのタイムアウト（ミリ秒）
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// APIのベースURL（空なら同一オリジン）
    pub base_url: String,
    pub timeout_ms: u32,
    /// ギャラリーを表示するページか
    pub gallery: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            gallery: true,
        }
    }
}

impl ClientConfig {
    /// data属性から設定を組み立てる
    ///
    /// `attr` には `"api-base"` のように `data-` を除いた名前が渡される。
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = attr("api-base")
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.base_url);

        let timeout_ms = attr("timeout-ms")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.timeout_ms);

        let gallery = attr("gallery")
            .map(|s| !matches!(s.trim().to_lowercase().as_str(), "false" | "0" | "off" | "no"))
            .unwrap_or(defaults.gallery);

        Self { base_url, timeout_ms, gallery }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attrs() {
        let config = ClientConfig::from_attrs(attrs(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout_ms, 30_000);
        assert!(config.gallery);
    }

    #[test]
    fn test_all_attrs() {
        let config = ClientConfig::from_attrs(attrs(&[
            ("api-base", " https://flora.example.com "),
            ("timeout-ms", "5000"),
            ("gallery", "false"),
        ]));
        assert_eq!(config.base_url, "https://flora.example.com");
        assert_eq!(config.timeout_ms, 5000);
        assert!(!config.gallery);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = ClientConfig::from_attrs(attrs(&[("timeout-ms", "soon")]));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

        let config = ClientConfig::from_attrs(attrs(&[("timeout-ms", "0")]));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
