//! Hand-rolled bindings to the global `L` namespace.
//!
//! Leaflet is loaded from a CDN `<script>` tag in `index.html`, so these
//! externs bind the handful of calls the tracking map makes instead of
//! pulling in a full binding crate. Coordinates and option bags cross the
//! boundary as plain `JsValue`s built by the host.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle to an `L.Map` instance.
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &LeafletMap, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, corners: &JsValue, options: &JsValue);

    /// Tears the map out of its container and releases its DOM listeners.
    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);
}

#[wasm_bindgen]
extern "C" {
    /// Handle to an `L.TileLayer`.
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap);
}

#[wasm_bindgen]
extern "C" {
    /// Handle to an `L.Icon`.
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub fn new_icon(options: &JsValue) -> Icon;
}

#[wasm_bindgen]
extern "C" {
    /// Handle to an `L.Marker`.
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str);

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, lat_lng: &JsValue);
}
