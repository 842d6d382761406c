pub mod backend;
pub mod cli;
pub mod conversation;
pub mod formatter;
pub mod models;
pub mod view;

use backend::new_backend;
use cli::Args;
use conversation::ConversationController;
use log::info;
use std::error::Error;
use view::input::TerminalInput;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Backend URL: {}", args.backend_url);
    info!("Debug: {}", args.debug);
    info!("-------------------------");

    let backend = new_backend(&args.backend_url)?;
    let controller = ConversationController::new(backend, args.greeting.clone());
    let (mut input, mut writer) = TerminalInput::new(&view::render_prompt(""))
        .map_err(|e| format!("Failed to initialize input: {}", e))?;
    let controller = view::session::run_session(controller, &mut input, &mut writer).await?;
    info!("Session ended after {} turns", controller.conversation().len());

    Ok(())
}
