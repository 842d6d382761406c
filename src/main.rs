use clap::Parser;
use dotenv::dotenv;
use portfolio_chat::cli::Args;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    let args = Args::parse();
    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    portfolio_chat::run(args).await
}
