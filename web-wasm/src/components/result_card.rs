//! 識別結果カード

use leptos::prelude::*;
use florascan_common::messages;
use florascan_common::{IdentifiedView, ResultView};

#[component]
pub fn ResultCard(result: ResultView) -> impl IntoView {
    match result {
        ResultView::NotIdentified => view! { <p>{messages::NOT_IDENTIFIED}</p> }.into_any(),
        ResultView::Identified(identified) => view! { <IdentifiedCard identified=*identified /> }.into_any(),
    }
}

#[component]
fn IdentifiedCard(identified: IdentifiedView) -> impl IntoView {
    let bar_style = format!("width: {}%;", identified.bar_width());
    let IdentifiedView {
        notice,
        best_guess,
        common_name,
        scientific_name,
        family,
        image_url,
        confidence_percent,
        alternatives,
        description,
        native_to_philippines,
        care_instructions,
    } = identified;

    let image_alt = common_name.clone();

    view! {
        <div class="result-card">
            <h3>{messages::RESULTS_HEADING}</h3>

            {notice.map(|notice| view! {
                <p class=format!("notice notice-{}", notice.as_str())>
                    <strong>{notice.title()}</strong>" "{notice.body()}
                </p>
            })}

            <div class="result-match">
                {best_guess.then(|| view! { <p class="best-guess">{messages::BEST_GUESS}</p> })}
                <strong class="common-name">{common_name}</strong>
                <p class="scientific-name">{scientific_name}</p>
                {family.map(|family| view! {
                    <p class="family"><strong>"Family:"</strong>" "{family}</p>
                })}
            </div>

            {image_url.map(|url| view! {
                <img class="result-image" src=url alt=image_alt />
            })}

            <div class="result-confidence">
                <p><strong>"Confidence:"</strong>" "{format!("{}%", confidence_percent)}</p>
                <div class="confidence-bar">
                    <div class="confidence-fill" style=bar_style></div>
                </div>
            </div>

            {(!alternatives.is_empty()).then(|| view! {
                <div class="alternatives">
                    <strong>{messages::OTHER_POSSIBILITIES}</strong>
                    <ul>
                        {alternatives
                            .into_iter()
                            .map(|a| view! { <li>{format!("{}: {}%", a.name, a.percent)}</li> })
                            .collect_view()}
                    </ul>
                </div>
            })}

            {description.map(|description| view! {
                <div class="result-description">
                    <strong>"Description:"</strong>
                    <p>{description}</p>
                </div>
            })}

            {native_to_philippines.then(|| view! {
                <p class="native-badge">{messages::NATIVE_TO_PHILIPPINES}</p>
            })}

            {care_instructions.map(|care| view! {
                <div class="care-instructions">
                    <strong>"Care Instructions:"</strong>
                    <p>{care}</p>
                </div>
            })}
        </div>
    }
}
