//! Dashboard state store

use crate::display_types::Artist;
use dioxus::prelude::*;
use std::fmt::Display;
use tracing::{info, warn};

/// Where the dashboard is in its load lifecycle
///
/// A failed load leaves the dashboard `Empty`, same as a load that
/// returned nothing. There is no separate error phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Empty,
    Loaded,
}

/// State for the dashboard view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Artists in the order the backend returned them
    pub artists: Vec<Artist>,
    pub phase: LoadPhase,
}

impl DashboardState {
    /// Apply the outcome of a load.
    ///
    /// Success replaces the whole collection. Failure is logged and
    /// otherwise ignored, so the previous contents stay on screen.
    pub fn apply_load<E: Display>(&mut self, outcome: Result<Vec<Artist>, E>) {
        match outcome {
            Ok(artists) => {
                info!("Loaded {} artists", artists.len());
                self.artists = artists;
                self.phase = LoadPhase::Loaded;
            }
            Err(e) => {
                warn!("Artist load failed: {e}");
            }
        }
    }
}
