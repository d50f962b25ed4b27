//! Display types for UI components
//!
//! These carry only the fields the views render. Wire formats are mapped
//! into them by the web crate.

/// Artist display info
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artist {
    /// Identifier as text; numeric wire ids are stringified
    pub id: String,
    pub name: String,
}

impl Artist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Detail route target for an artist
///
/// The id is percent-encoded so the path stays well-formed even when a
/// backend hands out ids with reserved characters.
pub fn artist_href(artist_id: &str) -> String {
    format!("/artist/{}", urlencoding::encode(artist_id))
}
