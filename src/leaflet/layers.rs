use anyhow::anyhow;
use leaflet::TileLayer;

use crate::config::{self, MAPBOX_STYLE, MAPBOX_TILE_URL, OSM_TILE_URL};

#[derive(serde::Serialize)]
#[allow(non_snake_case)]
struct LayerOptions {
    attribution: String,
    maxZoom: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessToken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tileSize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zoomOffset: Option<i32>,
}

/// Mapbox tiles when a token was supplied at build time, OpenStreetMap otherwise.
pub fn get_default_layer() -> anyhow::Result<TileLayer> {
    match config::mapbox_access_token() {
        Some(token) => get_mapbox_layer(token),
        None => get_osm_layer(),
    }
}

fn get_mapbox_layer(token: &str) -> anyhow::Result<TileLayer> {
    let options = LayerOptions {
        attribution: r#"&copy; <a href="https://www.mapbox.com/about/maps/">Mapbox</a> &copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#.to_string(),
        maxZoom: 18,
        id: Some(MAPBOX_STYLE.to_string()),
        accessToken: Some(token.to_string()),
        // Mapbox style tiles are 512px
        tileSize: Some(512),
        zoomOffset: Some(-1),
    };
    new_layer(MAPBOX_TILE_URL, &options)
}

fn get_osm_layer() -> anyhow::Result<TileLayer> {
    let options = LayerOptions {
        attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#.to_string(),
        maxZoom: 19,
        id: None,
        accessToken: None,
        tileSize: None,
        zoomOffset: None,
    };
    new_layer(OSM_TILE_URL, &options)
}

fn new_layer(url: &str, options: &LayerOptions) -> anyhow::Result<TileLayer> {
    let options = serde_wasm_bindgen::to_value(options)
        .map_err(|why| anyhow!("Could not build tile layer options: {why}"))?;
    Ok(TileLayer::new(url, &options))
}
