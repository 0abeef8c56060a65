use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use url::Url;

use super::{ ensure_ok, GeocodeService };
use crate::error::{ BotError, BotResult, Upstream };
use crate::models::geocode::GeocodeResponse;
use crate::models::Location;

/// `statuscode` value MapQuest uses for a successful lookup.
const STATUS_OK: u16 = 0;

pub struct MapQuestClient {
    http: HttpClient,
    geocode_url: Url,
    api_key: String,
}

impl MapQuestClient {
    pub fn new(http: HttpClient, geocode_url: Url, api_key: String) -> Self {
        Self { http, geocode_url, api_key }
    }
}

/// Picks the display name and first coordinate pair out of a geocode body.
pub fn extract_location(location: &str, status: u16, body: &str) -> BotResult<Location> {
    let parsed: GeocodeResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => {
            return Err(BotError::upstream(Upstream::Geocoding, status, body));
        }
    };
    if parsed.info.statuscode != STATUS_OK {
        return Err(BotError::upstream(Upstream::Geocoding, parsed.info.statuscode, body));
    }

    let unresolved = || BotError::GeocodeUnresolved { location: location.to_string() };
    let result = parsed.results.into_iter().next().ok_or_else(unresolved)?;
    let lat_lng = &result.locations.first().ok_or_else(unresolved)?.lat_lng;

    Ok(Location {
        display_name: result.provided_location.location,
        latitude: lat_lng.lat,
        longitude: lat_lng.lng,
    })
}

#[async_trait]
impl GeocodeService for MapQuestClient {
    async fn geocode(&self, location: &str) -> BotResult<Location> {
        debug!("GET {} location={}", self.geocode_url, location);
        let resp = self.http
            .get(self.geocode_url.clone())
            .query(&[("location", location), ("key", self.api_key.as_str())])
            .send().await?;
        // A 200 can still carry a provider failure in `info.statuscode`.
        let resp = ensure_ok(resp, Upstream::Geocoding).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        extract_location(location, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUSTIN: &str = r#"{
        "info": {"statuscode": 0, "messages": []},
        "results": [{
            "providedLocation": {"location": "Austin, TX"},
            "locations": [
                {"latLng": {"lat": 30.27, "lng": -97.74}},
                {"latLng": {"lat": 1.0, "lng": 2.0}}
            ]
        }]
    }"#;

    #[test]
    fn takes_first_result_and_first_coordinates() {
        let location = extract_location("Austin", 200, AUSTIN).unwrap();
        assert_eq!(location, Location {
            display_name: "Austin, TX".into(),
            latitude: 30.27,
            longitude: -97.74,
        });
    }

    #[test]
    fn non_zero_statuscode_is_upstream_error() {
        let body = r#"{"info": {"statuscode": 403, "messages": ["bad key"]}, "results": []}"#;
        match extract_location("Austin", 200, body).unwrap_err() {
            BotError::Upstream { service, status, body: text } => {
                assert_eq!(service, Upstream::Geocoding);
                assert_eq!(status, 403);
                assert_eq!(text, body);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_coordinates_is_unresolved() {
        let body = r#"{"info": {"statuscode": 0},
            "results": [{"providedLocation": {"location": "Nowhere"}, "locations": []}]}"#;
        assert!(matches!(
            extract_location("Nowhere", 200, body),
            Err(BotError::GeocodeUnresolved { ref location }) if location == "Nowhere"
        ));
    }

    #[test]
    fn missing_results_is_unresolved() {
        let body = r#"{"info": {"statuscode": 0}, "results": []}"#;
        assert!(matches!(extract_location("", 200, body), Err(BotError::GeocodeUnresolved { .. })));
    }

    #[test]
    fn non_json_body_keeps_http_status() {
        let err = extract_location("Austin", 502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, BotError::Upstream { status: 502, .. }));
    }
}
