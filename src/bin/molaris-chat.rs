//! Interactive tutor chat for dental technology students.
//!
//! This binary provides a REPL interface for conversing, in Spanish,
//! with a Gemini-backed dental technology tutor. The conversation is
//! persisted to a local snapshot file and restored on the next start.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! molaris-chat
//!
//! # Specify a model
//! molaris-chat --model gemini-2.5-flash
//!
//! # Use a different history file
//! molaris-chat --history /tmp/tutor.json
//!
//! # Disable colors (useful for piping output)
//! molaris-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Reset the conversation (asks for confirmation)
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use molaris::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatController, ConversationStore, GeminiSessionFactory,
    help_text, parse_command,
};
use molaris::{PlainTextRenderer, Renderer};

/// Main entry point for the molaris-chat application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("molaris-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let model = config.model.clone();

    let store = ConversationStore::new(config.history_path.clone());
    let factory = GeminiSessionFactory::new(config);
    let mut controller = ChatController::new(factory, store);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    controller.initialize();

    println!("Tutor de Tecnología Dental (model: {model})");
    println!("Type /help for commands, /quit to exit\n");

    for turn in controller.conversation() {
        renderer.print_turn(turn);
    }
    if let Some(error) = controller.error() {
        renderer.print_error(error);
    }

    loop {
        let readline = rl.readline("Tú: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("¡Hasta pronto!");
                            break;
                        }
                        ChatCommand::Clear => {
                            if confirm_clear(&mut rl)? {
                                controller.clear();
                                renderer.print_info("Conversación reiniciada.");
                                if let Some(turn) = controller.last_turn() {
                                    renderer.print_turn(turn);
                                }
                                if let Some(error) = controller.error() {
                                    renderer.print_error(error);
                                }
                            } else {
                                renderer.print_info("Borrado cancelado.");
                            }
                        }
                        ChatCommand::Stats => {
                            print_stats(&controller, &model);
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the tutor
                controller.submit(line).await;
                if let Some(turn) = controller.last_turn() {
                    renderer.print_turn(turn);
                }
                if let Some(error) = controller.error() {
                    renderer.print_error(error);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\n¡Hasta pronto!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Asks the user to confirm before clearing the conversation.
fn confirm_clear(rl: &mut DefaultEditor) -> Result<bool, ReadlineError> {
    match rl.readline("¿Borrar toda la conversación? (s/n): ") {
        Ok(answer) => {
            let answer = answer.trim().to_lowercase();
            Ok(matches!(answer.as_str(), "s" | "si" | "sí" | "y" | "yes"))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
        Err(err) => Err(err),
    }
}

fn print_stats<F: molaris::chat::SessionFactory>(
    controller: &ChatController<F>,
    model: &molaris::Model,
) {
    println!("    Session Statistics:");
    println!("      Model: {}", model);
    println!("      Turns: {}", controller.conversation().len());
    println!(
        "      Session: {}",
        if controller.has_session() {
            "ready"
        } else {
            "not initialized"
        }
    );
    match controller.error() {
        Some(error) => println!("      Last error: {}", error),
        None => println!("      Last error: (none)"),
    }
}
