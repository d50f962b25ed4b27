//! Artist card component - pure view with callbacks

use crate::display_types::{artist_href, Artist};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

/// Individual artist card
///
/// Rendered as a real anchor so the detail route shows up as the link
/// target. Plain clicks are handed to `on_click` with the artist id so the
/// caller can navigate without a page load. Modified or non-primary clicks
/// fall through to the browser (open in new tab and friends).
#[component]
pub fn ArtistCard(artist: Artist, on_click: EventHandler<String>) -> Element {
    let href = artist_href(&artist.id);
    let artist_id = artist.id.clone();

    rsx! {
        a {
            href: "{href}",
            class: "block",
            "data-testid": "artist-card",
            onclick: move |evt| {
                if is_plain_click(!evt.modifiers().is_empty(), evt.trigger_button()) {
                    evt.prevent_default();
                    on_click.call(artist_id.clone());
                }
            },
            div { class: "border p-6 rounded-lg hover:shadow-lg transition cursor-pointer",
                h2 { class: "text-xl font-semibold", "{artist.name}" }
                p { class: "text-gray-500 text-sm", "ID: {artist.id}" }
            }
        }
    }
}

/// Whether a click on a card should be routed in-app.
///
/// Some platforms report no button for synthesized clicks; those count as
/// primary.
pub fn is_plain_click(has_modifiers: bool, button: Option<MouseButton>) -> bool {
    !has_modifiers && matches!(button, None | Some(MouseButton::Primary))
}
