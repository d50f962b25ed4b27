//! Dashboard view component - pure rendering, no data fetching
//!
//! Accepts `ReadStore<DashboardState>` and subscribes to the artist list
//! only. Empty and loaded states render the same markup; the grid just has
//! no cards until artists arrive.

use crate::components::artist_card::ArtistCard;
use crate::components::helpers::PageContainer;
use crate::display_types::Artist;
use crate::stores::dashboard::{DashboardState, DashboardStateStoreExt};
use dioxus::prelude::*;

pub const DASHBOARD_TITLE: &str = "Artist Growth Radar";

#[component]
pub fn DashboardView(
    state: ReadStore<DashboardState>,
    // Navigation callback - called with artist_id when a card is clicked
    on_artist_click: EventHandler<String>,
) -> Element {
    let artists = state.artists().read().clone();

    rsx! {
        PageContainer {
            h1 { class: "text-3xl font-bold mb-8", "{DASHBOARD_TITLE}" }
            ArtistGrid { artists, on_artist_click }
        }
    }
}

/// Responsive card grid: one column on narrow viewports, three on wide
#[component]
pub fn ArtistGrid(artists: Vec<Artist>, on_artist_click: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-6",
            "data-testid": "artist-grid",
            for artist in artists {
                ArtistCard {
                    key: "{artist.id}",
                    artist,
                    on_click: on_artist_click,
                }
            }
        }
    }
}
