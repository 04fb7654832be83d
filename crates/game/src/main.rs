//! Chess CLI
//!
//! Play against the minimax engine. Settings come from the TOML file given
//! as the first argument, else `chess.toml`, else the defaults.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use chess_core::{Board, GameStatus};
use chess_game::config::DEFAULT_CONFIG_PATH;
use chess_game::{
    format_move, parse_promotion, render_board, Command, Game, GameConfig, GameError, GameResult,
    Storage,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const HELP: &[&str] = &[
    "Commands:",
    "  Move piece      - [column][row] [column][row], e.g. a2 a3",
    "                    add a letter to promote, e.g. e7 e8 q",
    "  Show board      - show",
    "  Show moves      - moves [column][row], e.g. moves a2",
    "  Rules refresher - rules",
    "  Help            - help",
    "  Abort game      - abort",
];

const RULES: &[&str] = &[
    "Pieces move as in standard chess; White moves first.",
    "A move may never leave your own king in check.",
    "Castle by moving the king two squares towards an unmoved rook.",
    "En passant is only available on the move right after the two-square advance.",
    "A pawn reaching the last rank is promoted to a queen, rook, bishop or knight.",
    "Checkmate wins; a side with no legal move that is not in check is stalemated.",
];

fn print_lines(lines: &[&str]) {
    for line in lines {
        println!("{line}");
    }
}

fn load_config() -> GameResult<GameConfig> {
    if let Some(path) = std::env::args().nth(1) {
        return GameConfig::load(Path::new(&path));
    }
    let default = Path::new(DEFAULT_CONFIG_PATH);
    if default.exists() {
        GameConfig::load(default)
    } else {
        Ok(GameConfig::default())
    }
}

fn load_board(storage: &Storage) -> Board {
    match storage.load() {
        Ok(Some(board)) => {
            println!("Resuming the saved game from {}.", storage.path().display());
            board
        }
        Ok(None) => Board::startpos(),
        Err(e) => {
            warn!(
                path = %storage.path().display(),
                error = %e,
                "unreadable save file, starting over"
            );
            Board::startpos()
        }
    }
}

/// Reads one trimmed line; `None` at end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

enum Turn {
    Played(GameStatus),
    Waiting,
    Quit,
}

fn human_turn(game: &mut Game, input: &mut impl BufRead) -> GameResult<Turn> {
    let Some(line) = read_line(input, "> ")? else {
        return Ok(Turn::Quit);
    };
    let (from, to, promotion) = match line.parse::<Command>()? {
        Command::Move {
            from,
            to,
            promotion,
        } => (from, to, promotion),
        Command::Moves(at) => {
            let dests: Vec<String> = game.destinations(at)?.iter().map(|c| c.to_string()).collect();
            if dests.is_empty() {
                println!("No moves from {at}.");
            } else {
                println!("Moves from {at}: {}", dests.join(" "));
            }
            return Ok(Turn::Waiting);
        }
        Command::Show => {
            print!("{}", render_board(&game.board().view()));
            return Ok(Turn::Waiting);
        }
        Command::Help => {
            print_lines(HELP);
            return Ok(Turn::Waiting);
        }
        Command::Rules => {
            print_lines(RULES);
            return Ok(Turn::Waiting);
        }
        Command::Abort => return Ok(Turn::Quit),
    };

    let outcome = game.play_human(from, to, promotion)?;
    let mut status = outcome.status;
    if outcome.promotion_pending {
        loop {
            let Some(answer) = read_line(input, "Promote to (q, r, b, n): ")? else {
                return Ok(Turn::Quit);
            };
            match parse_promotion(&answer).and_then(|kind| game.promote(to, kind)) {
                Ok(s) => {
                    status = s;
                    break;
                }
                Err(e) => println!("{e}"),
            }
        }
    }
    print!("{}", render_board(&game.board().view()));
    Ok(Turn::Played(status))
}

fn cpu_turn(game: &mut Game) -> GameResult<Turn> {
    println!("Thinking...");
    match game.play_cpu()? {
        Some(outcome) => {
            println!("CPU plays {}", format_move(&outcome.mv));
            print!("{}", render_board(&game.board().view()));
            Ok(Turn::Played(outcome.status))
        }
        None => Ok(Turn::Played(game.status()?)),
    }
}

fn run() -> GameResult<()> {
    let config = load_config()?;
    let storage = Storage::new(&config.save_path);
    let board = load_board(&storage);
    let mut game = Game::from_config(&config, board)?;

    print_lines(HELP);
    println!("You play {:?}.", game.human_color());
    print!("{}", render_board(&game.board().view()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        let turn = if game.is_human_turn() {
            human_turn(&mut game, &mut input)
        } else {
            cpu_turn(&mut game)
        };

        let status = match turn {
            Ok(Turn::Played(status)) => status,
            Ok(Turn::Waiting) => continue,
            Ok(Turn::Quit) => {
                println!("Game aborted; progress is saved.");
                return Ok(());
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e @ (GameError::Io(_) | GameError::Save(_))) => return Err(e),
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match status {
            GameStatus::InProgress => storage.save(game.board())?,
            GameStatus::Checkmate { winner } => {
                println!("Checkmate! {winner:?} wins.");
                storage.reset()?;
                return Ok(());
            }
            GameStatus::Stalemate => {
                println!("Stalemate! The game is drawn.");
                storage.reset()?;
                return Ok(());
            }
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game stopped");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
