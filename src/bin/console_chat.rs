//! Interactive console chat for exercising the diagnostic flow without HTTP.
//!
//! Runs the same scripted engine the API serves, minus the LLM fallback.
//! Type `quit` or `exit` to leave.

use std::io::{self, BufRead, Write};

use chat_engine::{ChatSession, Stage};
use colored::Colorize;

fn main() {
    let stdin = io::stdin();

    print!("{} ", "Your name:".bold());
    io::stdout().flush().ok();
    let mut name = String::new();
    if stdin.lock().read_line(&mut name).is_err() {
        return;
    }
    let name = name.trim();
    let name = if name.is_empty() { "driver" } else { name };

    let (mut session, greeting) = ChatSession::start(name);
    println!("\n{}\n", greeting.message.cyan());

    let mut line = String::new();
    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush().ok();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = session.handle_message(text);
        if reply.stage == Stage::DiagnosisComplete {
            let safe = reply
                .diagnosis
                .as_ref()
                .map(|d| d.is_safe_to_drive)
                .unwrap_or(true);
            if safe {
                println!("\n{}\n", reply.message.green());
            } else {
                println!("\n{}\n", reply.message.red().bold());
            }
            break;
        }
        println!("\n{}\n", reply.message.cyan());
    }

    println!("{}", "Drive safe!".bold());
}
