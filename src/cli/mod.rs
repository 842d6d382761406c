use clap::Parser;

use crate::conversation::store::DEFAULT_GREETING;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the question-answering backend (e.g., http://localhost:8000). Queries go to {base}/query.
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: String,

    /// Greeting shown as the first assistant message.
    #[arg(long, env = "CHAT_GREETING", default_value = DEFAULT_GREETING)]
    pub greeting: String,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}
