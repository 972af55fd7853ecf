//! Behavioral pattern: State
//! Example: support-ticket lifecycle (Draft -> Opened -> Closed -> reopened)
//!
//! Run with: cargo run --bin behavioral_state
//! Add --interactive to answer the close prompts yourself.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use colored::Colorize;
use gof_patterns::{Confirmation, ConfirmSource, Ticket};

/* ============================================================
 * Confirmation sources
 * ============================================================
 */

/// Reads the yes/no decision from stdin. Invalid lines yield `None`, so the
/// state machine keeps prompting.
struct StdinConfirm;

impl ConfirmSource for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Option<Confirmation> {
        println!("{}", prompt.yellow());
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        Confirmation::parse(&line)
    }
}

/// Replays canned answers so the demo runs unattended. The queue deliberately
/// contains an invalid answer to show the retry loop.
struct ReplayConfirm {
    inputs: VecDeque<&'static str>,
}

impl ConfirmSource for ReplayConfirm {
    fn confirm(&mut self, prompt: &str) -> Option<Confirmation> {
        println!("{}", prompt.yellow());
        let input = self.inputs.pop_front().unwrap_or("y");
        println!("> {input}");
        Confirmation::parse(input)
    }
}

/* ============================================================
 * Demo walk, following the original support-ticket scenario
 * ============================================================
 */

fn main() {
    let interactive = std::env::args().any(|arg| arg == "--interactive");
    let mut stdin_confirm = StdinConfirm;
    let mut replay_confirm = ReplayConfirm {
        inputs: VecDeque::from(["maybe", "n", "y"]),
    };
    let confirm: &mut dyn ConfirmSource = if interactive {
        &mut stdin_confirm
    } else {
        &mut replay_confirm
    };

    let mut ticket = Ticket::new("user@example.com");
    println!("Created ticket {} in state {}\n", ticket.id(), ticket.state().name().cyan());

    // User closes the draft before publishing anything.
    println!("{}", ticket.close(confirm));
    println!("State: {}\n", ticket.state().name().cyan());

    // User publishes the ticket.
    println!("{}", ticket.open("Hello, I have a problem with my software. What should I do?"));
    println!("State: {}\n", ticket.state().name().cyan());

    // Second publish hits the already-opened branch.
    println!("{}", ticket.open("oops, double-post"));
    println!("State: {}\n", ticket.state().name().cyan());

    // Tech support replies.
    println!("{}", ticket.reply("Hello! Have you tried to reboot your system?"));
    println!("State: {}\n", ticket.state().name().cyan());

    // User tries to close; the scripted run answers "maybe", then "n",
    // then closes for real with "y".
    println!("{}", ticket.close(confirm));
    println!("State: {}\n", ticket.state().name().cyan());
    if ticket.state() == gof_patterns::TicketState::Opened {
        println!("{}", ticket.close(confirm));
        println!("State: {}\n", ticket.state().name().cyan());
    }

    // Replying to a closed ticket falls back to direct contact.
    println!("{}", ticket.reply("Hello! It's been a while, did the reboot help?"));
    println!("State: {}\n", ticket.state().name().cyan());

    // Publishing a closed ticket reopens it as a fresh draft would.
    println!("{}", ticket.open("The problem is back."));
    println!("State: {}", ticket.state().name().cyan());
}
