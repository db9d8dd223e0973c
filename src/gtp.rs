//! Go Text Protocol (GTP) front-end.
//!
//! Lets the engine be driven by GTP v2 controllers (GUIs, match runners).
//! Moves travel as names (`C4`, `pass`); every move is pushed on the board
//! trail so that `undo` is a plain pop.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - 2 to 9
//! - `clear_board`
//! - `komi <value>` - accepted and ignored, scoring has no komi
//! - `play <color> <vertex>`
//! - `genmove <color>` - random legal move
//! - `undo`
//! - `final_score`

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::constants::DEFAULT_SIZE;
use crate::coord::Move;
use crate::error::BoardError;
use crate::player::{RandomPlayer, Strategy};
use crate::position::{Board, Color};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "undo",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    board: Board,
    player: RandomPlayer,
    /// Seed for the hash table of every new board, random if `None`
    seed: Option<u64>,
}

impl GtpEngine {
    /// Create an engine with an empty board of [`DEFAULT_SIZE`].
    pub fn new() -> Result<Self, BoardError> {
        Self::with_options(DEFAULT_SIZE, None)
    }

    /// Create an engine with the given board size and optional seed (used
    /// both for hash tables and for move selection).
    pub fn with_options(size: usize, seed: Option<u64>) -> Result<Self, BoardError> {
        let player = match seed {
            Some(s) => RandomPlayer::with_seed(s),
            None => RandomPlayer::new(),
        };
        Ok(Self {
            board: new_board(size, seed)?,
            player,
            seed,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the GTP command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!(%command, ?args, success, %message, "gtp");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match new_board(size, self.seed) {
                    Ok(board) => {
                        self.board = board;
                        (true, String::new())
                    }
                    Err(_) => (false, "unacceptable size".to_string()),
                }
            }

            "clear_board" => {
                self.board.clear();
                (true, String::new())
            }

            "komi" => match args.first().map(|a| a.parse::<f32>()) {
                Some(Ok(_)) => (true, String::new()),
                Some(Err(_)) => (false, "invalid komi".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                if let Err(msg) = self.expect_color(color) {
                    return (false, msg);
                }
                let mv = match self.board.name_to_move(vertex) {
                    Ok(mv) => mv,
                    Err(_) => return (false, "invalid coordinate".to_string()),
                };
                match self.push(mv) {
                    Ok(true) => (true, String::new()),
                    Ok(false) => (false, "illegal move".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                if let Err(msg) = self.expect_color(color) {
                    return (false, msg);
                }
                let mv = match self.player.select_move(&mut self.board) {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.push(mv) {
                    Ok(true) if mv == Move::Pass => (true, "pass".to_string()),
                    Ok(true) => (true, self.board.move_to_name(mv)),
                    Ok(false) => (false, "engine produced an illegal move".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "undo" => match self.board.pop() {
                Ok(()) => (true, String::new()),
                Err(_) => (false, "cannot undo".to_string()),
            },

            "final_score" => (true, self.board.final_go_score()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Push `mv`, dropping the trail frame again if the rules reject it.
    fn push(&mut self, mv: Move) -> Result<bool, BoardError> {
        let legal = self.board.push(mv)?;
        if !legal {
            self.board.pop()?;
        }
        Ok(legal)
    }

    /// Moves alternate strictly, so the color given must be the one to move.
    fn expect_color(&self, arg: &str) -> Result<(), String> {
        let color = match arg.to_lowercase().as_str() {
            "b" | "black" => Color::Black,
            "w" | "white" => Color::White,
            _ => return Err("invalid color".to_string()),
        };
        if color != self.board.next_player() {
            return Err(format!("{color} is not to move"));
        }
        Ok(())
    }
}

fn new_board(size: usize, seed: Option<u64>) -> Result<Board, BoardError> {
    match seed {
        Some(s) => Board::with_seed(size, s),
        None => Board::new(size),
    }
}
