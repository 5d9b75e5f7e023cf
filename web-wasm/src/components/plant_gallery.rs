//! 植物ギャラリーコンポーネント

use gloo::console;
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use florascan_common::messages::LOADING_PLANTS;
use florascan_common::{GalleryState, PlantApi, PlantCard, GALLERY_LIMIT, detail_message};
use crate::api::FetchClient;

#[component]
pub fn PlantGallery(client: FetchClient) -> impl IntoView {
    let (gallery, set_gallery) = signal(GalleryState::Loading);

    {
        let client = client.clone();
        spawn_local(async move {
            let result = client.list_plants(GALLERY_LIMIT).await;
            if let Err(e) = &result {
                console::error!("Error loading plants:", e.to_string());
            }
            set_gallery.set(GalleryState::from_result(&result, GALLERY_LIMIT as usize));
        });
    }

    let show_details = move |plant_id: u64| {
        console::log!("Plant clicked:", plant_id.to_string());
        let client = client.clone();
        spawn_local(async move {
            match client.plant(plant_id).await {
                Ok(plant) => alert(&detail_message(&plant)),
                Err(e) => console::error!("Error fetching plant details:", e.to_string()),
            }
        });
    };

    view! {
        <div class="plant-grid" id="plantGrid">
            {move || match gallery.get() {
                GalleryState::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| {
                        let show_details = show_details.clone();
                        view! { <PlantCardView card=card on_activate=show_details /> }
                    })
                    .collect_view()
                    .into_any(),
                GalleryState::Loading => view! { <p class="text-muted">{LOADING_PLANTS}</p> }.into_any(),
                other => view! { <p>{other.message()}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PlantCardView<F>(card: PlantCard, on_activate: F) -> impl IntoView
where
    F: Fn(u64) + 'static,
{
    let plant_id = card.id;

    view! {
        <article class="plant-card" on:click=move |_| on_activate(plant_id)>
            <div class="plant-photo" style=card.photo_style></div>
            <div class="plant-info">
                <div class="plant-name">{card.common_name}</div>
                <div class="plant-scientific">{card.scientific_name}</div>
            </div>
        </article>
    }
}
