//! 表示モデルのテキスト描画

use florascan_common::messages;
use florascan_common::{GalleryState, IdentifiedView, ResultView};
use std::fmt::Write;

/// 確信度バーの幅（文字数）
const BAR_CELLS: i64 = 20;

pub fn render_result(view: &ResultView) -> String {
    match view {
        ResultView::NotIdentified => format!("{}\n", messages::NOT_IDENTIFIED),
        ResultView::Identified(identified) => render_identified(identified),
    }
}

fn render_identified(view: &IdentifiedView) -> String {
    let mut out = String::new();

    // Stringへのwrite!は失敗しない
    let _ = writeln!(out, "{}", messages::RESULTS_HEADING);

    if let Some(notice) = view.notice {
        let _ = writeln!(out, "{} {}", notice.title(), notice.body());
    }

    out.push('\n');
    if view.best_guess {
        let _ = writeln!(out, "{}", messages::BEST_GUESS);
    }
    let _ = writeln!(out, "{}", view.common_name);
    let _ = writeln!(out, "  {}", view.scientific_name);
    if let Some(family) = &view.family {
        let _ = writeln!(out, "  Family: {}", family);
    }
    if let Some(url) = &view.image_url {
        let _ = writeln!(out, "  Image: {}", url);
    }

    let _ = writeln!(
        out,
        "\nConfidence: {}% {}",
        view.confidence_percent,
        confidence_bar(view.bar_width())
    );

    if !view.alternatives.is_empty() {
        let _ = writeln!(out, "\n{}", messages::OTHER_POSSIBILITIES);
        for alternative in &view.alternatives {
            let _ = writeln!(out, "  - {}: {}%", alternative.name, alternative.percent);
        }
    }

    if let Some(description) = &view.description {
        let _ = writeln!(out, "\nDescription:\n  {}", description);
    }

    if view.native_to_philippines {
        let _ = writeln!(out, "\n{}", messages::NATIVE_TO_PHILIPPINES);
    }

    if let Some(care) = &view.care_instructions {
        let _ = writeln!(out, "\nCare Instructions:\n  {}", care);
    }

    out
}

/// `[#####---------------]` 形式のバー
pub fn confidence_bar(width_percent: i64) -> String {
    let filled = ((width_percent.clamp(0, 100) * BAR_CELLS + 50) / 100) as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_CELLS as usize - filled)
    )
}

pub fn render_gallery(state: &GalleryState) -> String {
    if let Some(message) = state.message() {
        return format!("{}\n", message);
    }

    let mut out = String::new();
    for card in state.cards() {
        let _ = writeln!(out, "[{}] {} ({})", card.id, card.common_name, card.scientific_name);
    }
    out
}
