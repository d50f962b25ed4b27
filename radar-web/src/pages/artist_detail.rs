use crate::Route;
use dioxus::prelude::*;
use radar_ui::{BackButton, PageContainer};

/// Landing spot for a card's link. Holds the route parameter only; the
/// artist's details come from elsewhere.
#[component]
pub fn ArtistDetail(artist_id: String) -> Element {
    rsx! {
        PageContainer {
            BackButton {
                on_click: move |_| {
                    navigator().push(Route::Dashboard {});
                },
            }
            h1 { class: "text-3xl font-bold mb-2", "Artist" }
            p { class: "text-gray-500 text-sm", "data-testid": "artist-id", "ID: {artist_id}" }
        }
    }
}
