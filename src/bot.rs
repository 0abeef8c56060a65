use log::{ info, warn };
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{ GeocodeService, MessagingService, PassPredictionService };
use crate::command;
use crate::config::BotConfig;
use crate::error::{ BotError, BotResult };
use crate::models::Room;
use crate::reply::{ self, ReplyTimeZone };

/// What the loop does when answering a single command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaltPolicy {
    /// Any failure stops the bot.
    #[default]
    Halt,
    /// Geocode, prediction and publish failures are logged and polling continues.
    /// Polling failures still stop the bot.
    SkipFailedCommand,
}

#[derive(Debug)]
pub enum StepOutcome {
    /// Latest message was not a command.
    Idle,
    /// Reply text that was posted to the room.
    Responded(String),
    /// Command failed and the halt policy allowed the loop to go on.
    Skipped { location: String, error: BotError },
}

pub struct FlyoverBot {
    messaging: Arc<dyn MessagingService>,
    geocoder: Arc<dyn GeocodeService>,
    passes: Arc<dyn PassPredictionService>,
    room_id: String,
    trigger: char,
    poll_interval: Duration,
    halt_policy: HaltPolicy,
    time_zone: ReplyTimeZone,
    /// Text of the last command skipped under `SkipFailedCommand`. It stays the room's
    /// latest message until someone posts again, and must not be answered twice.
    last_skipped: Option<String>,
}

impl FlyoverBot {
    pub fn new(
        config: &BotConfig,
        room: &Room,
        messaging: Arc<dyn MessagingService>,
        geocoder: Arc<dyn GeocodeService>,
        passes: Arc<dyn PassPredictionService>
    ) -> Self {
        Self {
            messaging,
            geocoder,
            passes,
            room_id: room.id.clone(),
            trigger: config.trigger,
            poll_interval: config.poll_interval,
            halt_policy: config.halt_policy,
            time_zone: config.reply_time_zone,
            last_skipped: None,
        }
    }

    /// Runs until an error the halt policy does not absorb. Each poll is preceded by
    /// the fixed poll interval, whatever happened before.
    pub async fn run(&mut self) -> BotResult<()> {
        info!("Monitoring room {} for '{}' commands", self.room_id, self.trigger);
        loop {
            tokio::time::sleep(self.poll_interval).await;
            self.step().await?;
        }
    }

    /// One poll of the room, answering the latest message if it is a command.
    pub async fn step(&mut self) -> BotResult<StepOutcome> {
        let message = self.messaging.poll_latest(&self.room_id).await?;
        info!("Received message: {}", message.text);

        if self.last_skipped.as_deref() == Some(message.text.as_str()) {
            return Ok(StepOutcome::Idle);
        }
        self.last_skipped = None;

        let Some(location) = command::parse(&message.text, self.trigger) else {
            return Ok(StepOutcome::Idle);
        };

        match self.respond(location).await {
            Ok(text) => Ok(StepOutcome::Responded(text)),
            Err(error) if self.halt_policy == HaltPolicy::SkipFailedCommand => {
                warn!("Skipping command '{}': {}", location, error);
                self.last_skipped = Some(message.text.clone());
                Ok(StepOutcome::Skipped { location: location.to_string(), error })
            }
            Err(error) => Err(error),
        }
    }

    /// Geocodes `location`, looks up the next pass and posts the reply.
    pub async fn respond(&self, location: &str) -> BotResult<String> {
        let place = self.geocoder.geocode(location).await?;
        info!("Location: {}", place.display_name);
        info!("Location GPS coordinates: {}, {}", place.latitude, place.longitude);

        let pass = self.passes.predict_next_pass(place.latitude, place.longitude).await?;
        let text = reply::compose(
            &place.display_name,
            &self.time_zone.render(pass.rise_time_epoch_seconds),
            pass.duration_seconds
        );

        info!("Sending to Webex Teams: {}", text);
        self.messaging.publish(&self.room_id, &text).await?;
        Ok(text)
    }
}
