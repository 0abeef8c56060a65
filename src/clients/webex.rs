use async_trait::async_trait;
use log::debug;
use reqwest::header::{ AUTHORIZATION, CONTENT_TYPE };
use reqwest::Client as HttpClient;
use url::Url;

use super::{ ensure_ok, MessagingService };
use crate::credential::Credential;
use crate::error::{ BotError, BotResult, Upstream };
use crate::models::webex::{ ItemList, PostMessage };
use crate::models::{ Message, Room };

pub struct WebexClient {
    http: HttpClient,
    credential: Credential,
    rooms_url: Url,
    messages_url: Url,
}

impl WebexClient {
    pub fn new(http: HttpClient, credential: Credential, rooms_url: Url, messages_url: Url) -> Self {
        Self { http, credential, rooms_url, messages_url }
    }
}

#[async_trait]
impl MessagingService for WebexClient {
    async fn list_rooms(&self) -> BotResult<Vec<Room>> {
        debug!("GET {}", self.rooms_url);
        let resp = self.http
            .get(self.rooms_url.clone())
            .header(AUTHORIZATION, self.credential.as_str())
            .send().await?;
        let rooms = ensure_ok(resp, Upstream::Messaging).await?.json::<ItemList<Room>>().await?;
        Ok(rooms.items)
    }

    async fn poll_latest(&self, room_id: &str) -> BotResult<Message> {
        debug!("GET {} roomId={}", self.messages_url, room_id);
        let resp = self.http
            .get(self.messages_url.clone())
            .query(&[("roomId", room_id), ("max", "1")])
            .header(AUTHORIZATION, self.credential.as_str())
            .send().await?;
        let messages = ensure_ok(resp, Upstream::Messaging).await?.json::<ItemList<Message>>().await?;
        messages.items
            .into_iter()
            .next()
            .ok_or_else(|| BotError::EmptyRoom { room_id: room_id.to_string() })
    }

    async fn publish(&self, room_id: &str, text: &str) -> BotResult<()> {
        debug!("POST {} roomId={}", self.messages_url, room_id);
        let body = serde_json::to_string(&(PostMessage { room_id, text }))?;
        let resp = self.http
            .post(self.messages_url.clone())
            .header(AUTHORIZATION, self.credential.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send().await?;
        ensure_ok(resp, Upstream::Messaging).await?;
        Ok(())
    }
}
