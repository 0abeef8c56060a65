use clap::Parser;
use dotenv::dotenv;
use iss_flyover_bot::cli::Args;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    iss_flyover_bot::run(args).await
}
