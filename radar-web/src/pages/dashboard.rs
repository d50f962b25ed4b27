use crate::loader::{use_artist_loader, SharedArtistSource};
use crate::Route;
use dioxus::prelude::*;
use radar_ui::DashboardView;

#[component]
pub fn Dashboard() -> Element {
    let source: SharedArtistSource = use_context();
    let state = use_artist_loader(source);

    rsx! {
        DashboardView {
            state,
            on_artist_click: move |artist_id: String| {
                navigator().push(Route::ArtistDetail { artist_id });
            },
        }
    }
}
