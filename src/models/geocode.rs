use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub info: GeocodeInfo,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeInfo {
    pub statuscode: u16,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub provided_location: ProvidedLocation,
    #[serde(default)]
    pub locations: Vec<GeocodeLocation>,
}

#[derive(Debug, Deserialize)]
pub struct ProvidedLocation {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeLocation {
    pub lat_lng: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
