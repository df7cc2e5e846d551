use anyhow::anyhow;
use leaflet::Icon;

use crate::config::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE};

#[derive(serde::Serialize)]
#[allow(non_snake_case)]
struct IconOptions {
    iconUrl: String,
    iconSize: Vec<u32>,
    iconAnchor: Vec<u32>,
}

pub fn load_icon(name: &str) -> anyhow::Result<Icon> {
    let options = IconOptions {
        iconUrl: format!("/static/img/{name}.svg"),
        iconSize: MARKER_ICON_SIZE.to_vec(),
        iconAnchor: MARKER_ICON_ANCHOR.to_vec(),
    };

    let options = serde_wasm_bindgen::to_value(&options)
        .map_err(|why| anyhow!("Could not build options for icon `{name}`: {why}"))?;
    Ok(Icon::new(&options))
}
