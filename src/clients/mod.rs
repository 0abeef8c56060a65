pub mod mapquest;
pub mod open_notify;
pub mod webex;

use async_trait::async_trait;
use reqwest::{ Client as HttpClient, Response, StatusCode };
use std::time::Duration;

use crate::error::{ BotError, BotResult, Upstream };
use crate::models::{ Location, Message, PassPrediction, Room };

pub use self::mapquest::MapQuestClient;
pub use self::open_notify::OpenNotifyClient;
pub use self::webex::WebexClient;

/// Chat rooms and messages. Every call carries the resolved credential.
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn list_rooms(&self) -> BotResult<Vec<Room>>;

    /// Most recent message of the room.
    async fn poll_latest(&self, room_id: &str) -> BotResult<Message>;

    async fn publish(&self, room_id: &str, text: &str) -> BotResult<()>;
}

#[async_trait]
pub trait GeocodeService: Send + Sync {
    async fn geocode(&self, location: &str) -> BotResult<Location>;
}

#[async_trait]
pub trait PassPredictionService: Send + Sync {
    async fn predict_next_pass(&self, latitude: f64, longitude: f64) -> BotResult<PassPrediction>;
}

/// Shared reqwest client. Without a timeout reqwest waits indefinitely, same as the
/// blocking reference behaviour.
pub fn build_http_client(timeout: Option<Duration>) -> BotResult<HttpClient> {
    let mut builder = HttpClient::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Turns anything but `200 OK` into an upstream error holding the status and body text.
pub(crate) async fn ensure_ok(response: Response, service: Upstream) -> BotResult<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(BotError::upstream(service, status.as_u16(), body))
}
