//! One-shot artist loading tied to a component's mount lifetime

use crate::api::{ApiError, ArtistSource};
use dioxus::prelude::*;
use radar_ui::stores::DashboardState;
use radar_ui::Artist;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Shared handle to whatever source the dashboard reads from
pub type SharedArtistSource = Rc<dyn ArtistSource>;

/// Tracks whether the component that started a load is still mounted
#[derive(Clone, Debug)]
pub struct MountLifetime {
    active: Rc<Cell<bool>>,
}

impl MountLifetime {
    /// Ticket for a load starting now
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket {
            active: self.active.clone(),
        }
    }

    pub fn end(&self) {
        self.active.set(false);
    }
}

/// A fresh lifetime starts active
impl Default for MountLifetime {
    fn default() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }
}

/// Captured at load start, checked before the result is applied
#[derive(Clone, Debug)]
pub struct LoadTicket {
    active: Rc<Cell<bool>>,
}

impl LoadTicket {
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Fetch from `source`, returning the outcome only if the ticket is still
/// active once the response is in.
pub async fn load_artists(
    source: &dyn ArtistSource,
    ticket: LoadTicket,
) -> Option<Result<Vec<Artist>, ApiError>> {
    let outcome = source.fetch_artists().await;
    if !ticket.is_active() {
        debug!("Dashboard unmounted before artists arrived, dropping result");
        return None;
    }
    Some(outcome)
}

/// Dashboard state that fills itself from `source` once per mount.
///
/// The request starts on the first render only; re-renders reuse the same
/// store. When the component unmounts, a response that is still in flight
/// is dropped instead of written.
pub fn use_artist_loader(source: SharedArtistSource) -> Store<DashboardState> {
    let mut state = use_store(DashboardState::default);
    let lifetime = use_hook(MountLifetime::default);

    use_drop({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    use_hook(move || {
        let ticket = lifetime.ticket();
        debug!("Starting artist load");
        spawn(async move {
            if let Some(outcome) = load_artists(source.as_ref(), ticket).await {
                state.write().apply_load(outcome);
            }
        })
    });

    state
}
