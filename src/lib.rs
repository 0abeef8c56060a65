pub mod bot;
pub mod cli;
pub mod clients;
pub mod command;
pub mod config;
pub mod credential;
pub mod error;
pub mod models;
pub mod reply;
pub mod rooms;

use bot::FlyoverBot;
use cli::{ Args, Terminal };
use clients::{ build_http_client, MapQuestClient, MessagingService, OpenNotifyClient, WebexClient };
use config::BotConfig;
use log::{ error, info };
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = BotConfig::from_args(&args)?;

    info!("--- Core Configuration ---");
    info!("Rooms URL: {}", config.rooms_url);
    info!("Messages URL: {}", config.messages_url);
    info!("Geocode URL: {}", config.geocode_url);
    info!("ISS Pass URL: {}", config.iss_pass_url);
    info!("Poll Interval: {:?}", config.poll_interval);
    info!("HTTP Timeout: {:?}", config.http_timeout);
    info!("Command Trigger: {}", config.trigger);
    info!("Halt Policy: {:?}", config.halt_policy);
    info!("-------------------------");

    let mut terminal = Terminal::stdio();
    let prefer_hard_coded = match config.use_hard_coded_token {
        Some(choice) => choice,
        None => terminal.ask_use_hard_coded()?,
    };
    let credential = credential::resolve(prefer_hard_coded, &config.hard_coded_token, || {
        terminal.ask_token()
    })?;

    let http = build_http_client(config.http_timeout)?;
    let messaging = Arc::new(
        WebexClient::new(
            http.clone(),
            credential,
            config.rooms_url.clone(),
            config.messages_url.clone()
        )
    );

    let rooms = messaging.list_rooms().await?;
    terminal.print_rooms(&rooms)?;
    let room = terminal.select_room(&rooms, config.room.as_deref())?;
    info!("Selected room '{}' ({})", room.title, room.id);

    let geocoder = Arc::new(
        MapQuestClient::new(http.clone(), config.geocode_url.clone(), config.mapquest_key.clone())
    );
    let passes = Arc::new(OpenNotifyClient::new(http, config.iss_pass_url.clone()));
    let mut bot = FlyoverBot::new(&config, &room, messaging, geocoder, passes);

    if let Err(e) = bot.run().await {
        error!("Stopping bot: {}", e);
        return Err(e.into());
    }
    Ok(())
}
