use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use gm_engine::{EngineConfig, GameSession, Tool};

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Tool(Tool),
    State,
    Help,
    Quit,
    Unknown(String),
}

const HELP: &str = "Commands:
  /start [name]   begin a new adventure
  /scene          repeat the current scene
  /journal        show journal, inventory, and recent choices
  /restart        wipe everything and begin again
  /state          dump the session state as JSON
  /help           show this help
  /quit           leave the game
Anything else is treated as your action.";

fn parse_line(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix('/') else {
        return Input::Tool(Tool::PlayerAction {
            action: line.to_string(),
        });
    };

    let mut parts = command.splitn(2, ' ');
    let name = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next();

    let tool_name = match name.as_str() {
        "start" => "start_adventure",
        "scene" | "look" => "get_scene",
        "journal" => "show_journal",
        "restart" => "restart_adventure",
        "state" => return Input::State,
        "help" | "?" => return Input::Help,
        "quit" | "q" | "exit" => return Input::Quit,
        other => other,
    };
    match Tool::parse(tool_name, arg) {
        Some(tool) => Input::Tool(tool),
        None => Input::Unknown(name),
    }
}

pub fn run(
    world_path: Option<&Path>,
    name: Option<&str>,
    history: usize,
    plain: bool,
) -> Result<(), String> {
    let world = Arc::new(super::load_world(world_path)?);
    let mut config = EngineConfig::default().with_history_limit(history);
    if plain {
        config = config.without_preamble();
    }

    let mut session = GameSession::new(world, config);

    println!("  {} {}", "Playing".bold(), session.world().meta.title);
    println!("  Type '/help' for commands, '/quit' to exit.\n");

    if name.is_some() {
        println!("{}\n", session.start(name));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Input::Tool(tool) => println!("{}\n", session.dispatch(tool)),
            Input::State => {
                let json =
                    serde_json::to_string_pretty(session.state()).map_err(|e| e.to_string())?;
                println!("{json}\n");
            }
            Input::Help => println!("{HELP}\n"),
            Input::Quit => {
                println!("Goodbye!");
                break;
            }
            Input::Unknown(cmd) => {
                println!("{}\n", format!("unknown command: /{cmd}").yellow());
            }
        }
    }

    Ok(())
}
