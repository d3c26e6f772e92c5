use std::io::{self, Write};

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use em_core::{Mixer, Token};
use em_session::{MixSession, Reveal};

/// What the loop should do after a command.
enum Flow {
    Continue(String),
    Quit,
}

pub fn run(mixer: &Mixer) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;
    runtime.block_on(repl(mixer))
}

async fn repl(mixer: &Mixer) -> Result<(), String> {
    let mut session = MixSession::from_mixer(mixer);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("  {} Emoji Mixer", "Starting".bold());
    println!("  {}", session.phase().headline());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    prompt()?;

    loop {
        tokio::select! {
            Some(reveal) = session.next_reveal(), if session.is_pending() => {
                println!("\n{}\n", render_reveal(&reveal));
                prompt()?;
            }
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break; // EOF
                };
                match handle(&mut session, mixer, line.trim()).await {
                    Flow::Continue(output) => {
                        if !output.is_empty() {
                            println!("{output}\n");
                        }
                    }
                    Flow::Quit => {
                        println!("Goodbye!");
                        break;
                    }
                }
                prompt()?;
            }
        }
    }

    if session.cancel() {
        println!("  (remix cancelled)");
    }
    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout().flush().map_err(|e| e.to_string())
}

async fn handle(session: &mut MixSession, mixer: &Mixer, input: &str) -> Flow {
    if input.is_empty() {
        return Flow::Continue(String::new());
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    let output = match cmd.as_str() {
        "left" | "l" => select(mixer, arg).map(|token| {
            session.select_left(token.clone());
            format!("Left: {token}")
        }),
        "right" | "r" => select(mixer, arg).map(|token| {
            session.select_right(token.clone());
            format!("Right: {token}")
        }),
        "remix" | "mix" => {
            if session.trigger_remix() {
                Ok(format!("{}...", session.phase().headline()))
            } else {
                Ok(session.phase().headline().to_string())
            }
        }
        "wait" => match session.next_reveal().await {
            Some(reveal) => Ok(render_reveal(&reveal)),
            None => Ok("Nothing is mixing.".to_string()),
        },
        "cancel" => {
            if session.cancel() {
                Ok("Remix cancelled.".to_string())
            } else {
                Ok("Nothing is mixing.".to_string())
            }
        }
        "status" => Ok(render_status(session)),
        "catalog" => Ok(super::catalog::render(mixer).trim_end().to_string()),
        "help" => Ok(HELP.to_string()),
        "quit" | "q" | "exit" => return Flow::Quit,
        _ => Err(format!("unknown command: {cmd} (type 'help')")),
    };

    match output {
        Ok(text) => Flow::Continue(text),
        Err(e) => Flow::Continue(e.yellow().to_string()),
    }
}

fn select<'a>(mixer: &'a Mixer, arg: &str) -> Result<&'a Token, String> {
    if arg.is_empty() {
        return Err("usage: left|right <emoji or number>".to_string());
    }
    super::pick(mixer, arg)
}

fn render_reveal(reveal: &Reveal) -> String {
    format!(
        "  Your remix: {} + {} → {}",
        reveal.left, reveal.right, reveal.result
    )
}

fn render_status(session: &MixSession) -> String {
    let slot = |token: Option<&Token>| {
        token.map_or_else(|| "—".to_string(), ToString::to_string)
    };
    let phase = session.phase();
    let mut out = format!(
        "  {}\n  {}\n  Left: {}  Right: {}  ({phase})",
        phase.headline(),
        session.status_line(),
        slot(session.left()),
        slot(session.right()),
    );
    if let Some((left, right)) = session.mixing_pair().filter(|_| phase.is_mixing()) {
        out.push_str(&format!("\n  Mixing: {left} + {right}"));
    }
    out
}

const HELP: &str = "\
  left <emoji|n>    pick the first emoji
  right <emoji|n>   pick the second emoji
  remix             start mixing the current pair
  wait              wait for the current remix to reveal
  cancel            cancel the current remix
  status            show picks and the last result
  catalog           list the emojis
  quit              leave";
