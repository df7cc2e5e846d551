mod icons;
mod layers;

use std::{cell::RefCell, ops::Deref, rc::Rc};

use anyhow::anyhow;
use common_data::{marker_plan, Coordinate, SearchResult};
use gloo_utils::document;
use leaflet::{Icon, LatLng, Map, Marker};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlElement, Node};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::config::{DEFAULT_CENTER, DEFAULT_ZOOM, FLY_TO_ZOOM, MARKER_ICON};

// `L.Map#remove` is not bound by the leaflet crate.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    type RemovableMap;

    #[wasm_bindgen(method, js_name = remove)]
    fn remove_map(this: &RemovableMap);
}

/// Owns the Leaflet map, its container element and the marker layer.
///
/// Built once by [`MapComponent`]; the map is torn down when the last
/// [`MapHandle`] goes away.
pub struct MapService {
    map: Map,
    container: HtmlElement,
    icon: Icon,
    markers: RefCell<Vec<Marker>>,
}

impl MapService {
    pub fn new() -> anyhow::Result<Self> {
        let container = document()
            .create_element("div")
            .map_err(|why| anyhow!("Could not create map container: {why:?}"))?;
        let container: HtmlElement = container
            .dyn_into()
            .map_err(|_| anyhow!("Map container is not an HTML element"))?;
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &JsValue::NULL);
        map.setView(&LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1), DEFAULT_ZOOM);
        layers::get_default_layer()?.addTo(&map);

        // Without an icon there is nothing to draw markers with
        let icon = icons::load_icon(MARKER_ICON)?;

        Ok(Self {
            map,
            container,
            icon,
            markers: RefCell::new(Vec::new()),
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Recompute the map size once the container is in the page.
    pub fn resize(&self) {
        self.map.invalidateSize(false);
    }

    pub fn fly_to(&self, coordinate: Coordinate) {
        self.map.flyTo(
            &LatLng::new(coordinate.latitude, coordinate.longitude),
            FLY_TO_ZOOM,
        );
    }

    /// Replace every marker with one per coordinate.
    pub fn set_markers(&self, points: &[Coordinate]) {
        let mut markers = self.markers.borrow_mut();
        for marker in markers.drain(..) {
            marker.remove();
        }

        for point in points {
            let marker = Marker::new(&LatLng::new(point.latitude, point.longitude));
            marker.setIcon(&self.icon);
            marker.addTo(&self.map);
            markers.push(marker);
        }
        log::debug!("Map shows {} markers", markers.len());
    }
}

impl Drop for MapService {
    fn drop(&mut self) {
        for marker in self.markers.get_mut().drain(..) {
            marker.remove();
        }
        self.map.unchecked_ref::<RemovableMap>().remove_map();
    }
}

/// Shared handle to the page's map. Two handles are equal when they point at
/// the same map.
#[derive(Clone)]
pub struct MapHandle(Rc<MapService>);

impl MapHandle {
    pub fn new(service: MapService) -> Self {
        Self(Rc::new(service))
    }
}

impl PartialEq for MapHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for MapHandle {
    type Target = MapService;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Put markers for `results` on the map and move the camera to the first one.
pub fn show_results(map: Option<&MapHandle>, results: &[SearchResult]) {
    let Some(plan) = marker_plan(results) else {
        return;
    };
    let Some(map) = map else {
        log::warn!("Map not initialized, skipping marker update");
        return;
    };
    map.set_markers(&plan.points);
    map.fly_to(plan.camera);
}

pub fn fly_to(map: Option<&MapHandle>, coordinate: Coordinate) {
    match map {
        Some(map) => map.fly_to(coordinate),
        None => log::warn!("Map not initialized, skipping fly to {coordinate:?}"),
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
    pub on_ready: Callback<MapHandle>,
}

#[function_component]
pub fn MapComponent(props: &Props) -> Html {
    let service = use_state(|| match MapService::new() {
        Ok(service) => Some(MapHandle::new(service)),
        Err(why) => {
            log::error!("Could not create map: {why:#}");
            None
        }
    });

    {
        let service = (*service).clone();
        let on_ready = props.on_ready.clone();
        use_effect_once(move || {
            if let Some(map) = service {
                map.resize();
                on_ready.emit(map);
            }
            || ()
        });
    }

    let Some(map) = (*service).clone() else {
        return html! {
            <div class={classes!("map-container", "map-unavailable", props.class.clone())} style={&props.style}>
                {"Map unavailable"}
            </div>
        };
    };

    // To render the map, need to create VRef to the map's element
    let node: Node = map.container().clone().into();
    html! {
        <div class={classes!("map-container", props.class.clone())} style={&props.style}>
            {Html::VRef(node)}
        </div>
    }
}
