//! Keyword Chat console.
//!
//! Loop: print `You: `, read one line from stdin, print `Chatbot: <reply>`,
//! stop when a farewell sets the exit flag or stdin closes. Exits with a
//! non-zero status on unrecoverable I/O or rules errors.
//!
//! Usage: `chatbot [rules.toml]`. Without an argument the compiled-in rule
//! tables are used.

mod error;
mod logger;

use std::io::{self, BufRead, Write};
use std::path::Path;

use chat_rules::RulesConfig;
use responder_core::Responder;
use tracing::{debug, info};

use error::AppError;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    logger::init("warn")?;

    let rules = match std::env::args().nth(1) {
        Some(path) => RulesConfig::load(Path::new(&path))?,
        None => RulesConfig::default(),
    };
    info!(
        bot_name = %rules.bot_name,
        entries = rules.knowledge_base.len(),
        "rules loaded"
    );

    let responder = Responder::new(rules)?;

    println!("--- {} ---", responder.bot_name());
    println!("Chatbot: Hello! I'm here to help. Type 'bye' or 'quit' to exit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            info!("stdin closed");
            break;
        };
        let line = line?;
        debug!(input = %line, "line received");

        // Empty lines are answered too: they normalize to zero tokens and
        // fall through to the default response.
        let reply = responder.respond(&line);
        println!("Chatbot: {}", reply.text);

        if reply.end_conversation {
            info!("farewell received, ending conversation");
            break;
        }
    }

    Ok(())
}
