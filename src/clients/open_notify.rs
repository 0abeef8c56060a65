use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use url::Url;

use super::{ ensure_ok, PassPredictionService };
use crate::error::{ BotError, BotResult, Upstream };
use crate::models::pass::PassResponse;
use crate::models::PassPrediction;

pub struct OpenNotifyClient {
    http: HttpClient,
    pass_url: Url,
}

impl OpenNotifyClient {
    pub fn new(http: HttpClient, pass_url: Url) -> Self {
        Self { http, pass_url }
    }
}

/// First predicted pass of a pass-prediction body. A body without a `response`
/// list is an upstream error carrying `status` and the body.
pub fn extract_next_pass(status: u16, body: &str) -> BotResult<PassPrediction> {
    let upstream = || BotError::upstream(Upstream::PassPrediction, status, body);
    let parsed: PassResponse = serde_json::from_str(body).map_err(|_| upstream())?;
    parsed.response
        .as_deref()
        .and_then(|passes| passes.first())
        .map(PassPrediction::from)
        .ok_or_else(upstream)
}

#[async_trait]
impl PassPredictionService for OpenNotifyClient {
    async fn predict_next_pass(&self, latitude: f64, longitude: f64) -> BotResult<PassPrediction> {
        debug!("GET {} lat={} lon={}", self.pass_url, latitude, longitude);
        let resp = self.http
            .get(self.pass_url.clone())
            .query(&[("lat", latitude), ("lon", longitude)])
            .send().await?;
        let resp = ensure_ok(resp, Upstream::PassPrediction).await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        extract_next_pass(status, &body)
    }
}
