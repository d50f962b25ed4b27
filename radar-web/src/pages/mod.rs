mod artist_detail;
mod dashboard;

pub use artist_detail::ArtistDetail;
pub use dashboard::Dashboard;
