use std::time::Duration;
use url::Url;

use crate::bot::HaltPolicy;
use crate::cli::Args;
use crate::error::{ BotError, BotResult };
use crate::reply::ReplyTimeZone;

pub const DEFAULT_ROOMS_URL: &str = "https://api.ciscospark.com/v1/rooms";
pub const DEFAULT_MESSAGES_URL: &str = "https://api.ciscospark.com/v1/messages";
pub const DEFAULT_GEOCODE_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";
pub const DEFAULT_ISS_PASS_URL: &str = "http://api.open-notify.org/iss-pass.json";
pub const PLACEHOLDER_MAPQUEST_KEY: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Immutable settings shared by every stage of the pipeline.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub rooms_url: Url,
    pub messages_url: Url,
    pub geocode_url: Url,
    pub iss_pass_url: Url,
    pub hard_coded_token: String,
    pub mapquest_key: String,
    pub use_hard_coded_token: Option<bool>,
    pub room: Option<String>,
    pub poll_interval: Duration,
    pub http_timeout: Option<Duration>,
    pub trigger: char,
    pub halt_policy: HaltPolicy,
    pub reply_time_zone: ReplyTimeZone,
}

fn parse_url(name: &str, value: &str) -> BotResult<Url> {
    Url::parse(value).map_err(|e| BotError::Config(format!("{} '{}': {}", name, value, e)))
}

impl BotConfig {
    pub fn from_args(args: &Args) -> BotResult<Self> {
        Ok(Self {
            rooms_url: parse_url("rooms URL", &args.rooms_url)?,
            messages_url: parse_url("messages URL", &args.messages_url)?,
            geocode_url: parse_url("geocode URL", &args.geocode_url)?,
            iss_pass_url: parse_url("ISS pass URL", &args.iss_pass_url)?,
            hard_coded_token: args.hard_coded_token.clone(),
            mapquest_key: args.mapquest_key.clone(),
            use_hard_coded_token: args.use_hard_coded_token,
            room: args.room.clone().filter(|r| !r.is_empty()),
            poll_interval: Duration::from_millis(args.poll_interval_ms),
            http_timeout: args.http_timeout_secs.map(Duration::from_secs),
            trigger: args.trigger,
            halt_policy: if args.skip_failed_commands {
                HaltPolicy::SkipFailedCommand
            } else {
                HaltPolicy::Halt
            },
            reply_time_zone: if args.utc { ReplyTimeZone::Utc } else { ReplyTimeZone::Local },
        })
    }
}
