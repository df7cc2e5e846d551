//! Build-time and page-level settings.

use log::Level;

/// Used when the page origin can't be read (e.g. opened from `file://`).
pub const SERVER_ADDR: &str = "http://localhost:5000";

/// Id of the element the page template provides for the app.
pub const MOUNT_POINT_ID: &str = "container";

pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

// Map
pub const DEFAULT_CENTER: (f64, f64) = (39.5, -98.35);
pub const DEFAULT_ZOOM: f64 = 4.0;
pub const FLY_TO_ZOOM: f64 = 12.0;

pub const MARKER_ICON: &str = "marker";
pub const MARKER_ICON_SIZE: [u32; 2] = [25, 41];
pub const MARKER_ICON_ANCHOR: [u32; 2] = [12, 41];

pub const MAPBOX_STYLE: &str = "mapbox/outdoors-v12";
pub const MAPBOX_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub fn api_base() -> String {
    match gloo_utils::window().location().origin() {
        Ok(origin) if origin.starts_with("http") => origin,
        _ => SERVER_ADDR.to_string(),
    }
}

pub fn mapbox_access_token() -> Option<&'static str> {
    option_env!("MAPBOX_ACCESS_TOKEN").filter(|token| !token.is_empty())
}
