use std::fmt;
use thiserror::Error;

/// The third-party HTTP APIs the bot talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Messaging,
    Geocoding,
    PassPrediction,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Messaging => write!(f, "Webex Teams"),
            Upstream::Geocoding => write!(f, "MapQuest"),
            Upstream::PassPrediction => write!(f, "open-notify.org"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Incorrect reply from {service} API. Status code: {status}. Text: {body}")]
    Upstream {
        service: Upstream,
        status: u16,
        body: String,
    },

    #[error("There are no messages in the room {room_id}.")]
    EmptyRoom { room_id: String },

    #[error("Sorry, I didn't find any room with {query} in it.")]
    RoomNotFound { query: String },

    #[error("Could not resolve GPS coordinates for location '{location}'")]
    GeocodeUnresolved { location: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BotError {
    pub fn upstream(service: Upstream, status: u16, body: impl Into<String>) -> Self {
        BotError::Upstream { service, status, body: body.into() }
    }

    /// A missed room search only asks the operator again; everything else stops the bot.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BotError::RoomNotFound { .. })
    }
}

pub type BotResult<T> = Result<T, BotError>;
