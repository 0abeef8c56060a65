use clap::Parser;
use std::io::{ self, BufRead, Write };

use crate::config::{
    DEFAULT_GEOCODE_URL,
    DEFAULT_ISS_PASS_URL,
    DEFAULT_MESSAGES_URL,
    DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_ROOMS_URL,
    PLACEHOLDER_MAPQUEST_KEY,
};
use crate::credential::PLACEHOLDER_TOKEN;
use crate::error::BotResult;
use crate::models::Room;
use crate::rooms::find_room;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Webex Teams Args ---
    /// Webex Teams rooms endpoint
    #[arg(long, env = "WEBEX_ROOMS_URL", default_value = DEFAULT_ROOMS_URL)]
    pub rooms_url: String,

    /// Webex Teams messages endpoint, used for polling and for posting replies
    #[arg(long, env = "WEBEX_MESSAGES_URL", default_value = DEFAULT_MESSAGES_URL)]
    pub messages_url: String,

    /// Token used when the operator picks the hard coded token. Sent as is, so include the "Bearer " prefix.
    #[arg(long, env = "WEBEX_ACCESS_TOKEN", default_value = PLACEHOLDER_TOKEN, hide_env_values = true)]
    pub hard_coded_token: String,

    /// Skip the y/n question and use (true) or refuse (false) the hard coded token
    #[arg(long, env = "USE_HARD_CODED_TOKEN")]
    pub use_hard_coded_token: Option<bool>,

    /// Room title substring to monitor. Falls back to asking when nothing matches.
    #[arg(long, env = "WEBEX_ROOM")]
    pub room: Option<String>,

    // --- Geocoding Args ---
    /// MapQuest geocoding endpoint
    #[arg(long, env = "MAPQUEST_GEOCODE_URL", default_value = DEFAULT_GEOCODE_URL)]
    pub geocode_url: String,

    /// MapQuest API key
    #[arg(long, env = "MAPQUEST_API_KEY", default_value = PLACEHOLDER_MAPQUEST_KEY, hide_env_values = true)]
    pub mapquest_key: String,

    // --- Pass Prediction Args ---
    /// ISS pass prediction endpoint
    #[arg(long, env = "ISS_PASS_URL", default_value = DEFAULT_ISS_PASS_URL)]
    pub iss_pass_url: String,

    // --- General App Args ---
    /// Delay before every poll of the room, in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Timeout for every HTTP request. Requests wait indefinitely when unset.
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,

    /// Leading character that marks a message as a location query
    #[arg(long, env = "COMMAND_TRIGGER", default_value = "/")]
    pub trigger: char,

    /// Log a failed command and keep polling instead of stopping the bot
    #[arg(long, env = "SKIP_FAILED_COMMANDS", default_value = "false")]
    pub skip_failed_commands: bool,

    /// Render the flyover time in UTC instead of local time
    #[arg(long, env = "REPLY_UTC", default_value = "false")]
    pub utc: bool,
}

/// Line-oriented operator dialogue over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Only an explicit "n"/"N" refuses the hard coded token.
    pub fn ask_use_hard_coded(&mut self) -> io::Result<bool> {
        let choice = self.ask("Do you wish to use the hard coded token? (y/n)")?;
        Ok(!(choice == "n" || choice == "N"))
    }

    pub fn ask_token(&mut self) -> io::Result<String> {
        self.ask("Enter your access token: ")
    }

    pub fn print_rooms(&mut self, rooms: &[Room]) -> io::Result<()> {
        writeln!(self.output, "List of rooms:")?;
        for room in rooms {
            writeln!(self.output, "{}", room.title)?;
        }
        Ok(())
    }

    /// Keeps asking for a title substring until one matches. `initial` is tried first.
    pub fn select_room(&mut self, rooms: &[Room], initial: Option<&str>) -> BotResult<Room> {
        let mut pending = initial.map(str::to_string);
        loop {
            let query = match pending.take() {
                Some(query) => query,
                None =>
                    self.ask(
                        "Which room should be monitored for /location (e.g. /San Jose) messages? "
                    )?,
            };
            match find_room(rooms, &query) {
                Ok(room) => {
                    writeln!(self.output, "Found rooms with the word {}", query)?;
                    writeln!(self.output, "Found room : {}", room.title)?;
                    return Ok(room.clone());
                }
                Err(err) if !err.is_fatal() => {
                    writeln!(self.output, "{}", err)?;
                    writeln!(self.output, "Please try again...")?;
                }
                Err(err) => {
                    return Err(err);
                }
            }
        }
    }
}
