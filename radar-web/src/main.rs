use tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    info!("Starting Artist Growth Radar");
    dioxus::launch(radar_web::App);
}
