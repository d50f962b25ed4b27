pub mod api;
pub mod config;
pub mod loader;
pub mod pages;

use api::HttpArtistSource;
use config::ApiConfig;
use dioxus::prelude::*;
use loader::SharedArtistSource;
use pages::{ArtistDetail, Dashboard};
use std::rc::Rc;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/artist/:artist_id")]
    ArtistDetail { artist_id: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = ApiConfig::load();
        Rc::new(HttpArtistSource::new(&config)) as SharedArtistSource
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
