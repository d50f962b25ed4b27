//! Dashboard UI components

pub mod artist_card;
pub mod dashboard;
pub mod helpers;

pub use artist_card::ArtistCard;
pub use dashboard::{ArtistGrid, DashboardView, DASHBOARD_TITLE};
pub use helpers::{BackButton, PageContainer};
