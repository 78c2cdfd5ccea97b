mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::{
    Difficulty, GameMode, GameSession, Mark, SessionRng, log, logger,
};

use config::Config;
use render::{render_board, status_message};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the preferences file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Game mode (pvp or pvc); overrides the configured preference.
    #[arg(long)]
    mode: Option<String>,

    /// Computer difficulty (easy, medium or hard); overrides the configured preference.
    #[arg(long)]
    difficulty: Option<String>,

    /// Seed for the computer's random move tiers.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Err(e) = run(&args) {
        log!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let mut config = Config::load(&args.config)?;
    let mut save_preferences = false;

    if let Some(mode) = &args.mode {
        config.mode = GameMode::from_name(mode)?;
        save_preferences = true;
    }
    if let Some(difficulty) = &args.difficulty {
        config.difficulty = Difficulty::from_name(difficulty)?;
        save_preferences = true;
    }
    if save_preferences && let Err(e) = config.save(&args.config) {
        log!("Failed to save preferences: {}", e);
    }

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let mut session = GameSession::new(config.mode, config.difficulty, rng);
    log!(
        "Starting {} game at {} difficulty (seed {})",
        config.mode.name(),
        config.difficulty.name(),
        session.seed()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!(
            "{}",
            render_board(session.board(), session.winning_line().as_ref())
        );
        println!("{}", status_message(&session));

        if !session.is_active() {
            print!("Play again? [y/n] ");
            io::stdout().flush().ok();
            match next_input(&mut lines)? {
                Some(answer) if answer == "y" => {
                    session.reset();
                    continue;
                }
                _ => break,
            }
        }

        let computer_turn =
            session.mode() == Some(GameMode::Pvc) && session.current_mark() == Mark::O;
        if computer_turn {
            thread::sleep(Duration::from_millis(config.thinking_delay_ms));
            let (index, _) = session.computer_move().map_err(|e| e.to_string())?;
            log!("Computer plays cell {}", index);
            continue;
        }

        print!("Cell (0-8), d <difficulty>, r to restart, q to quit: ");
        io::stdout().flush().ok();
        let Some(input) = next_input(&mut lines)? else {
            break;
        };

        match input.as_str() {
            "" => {}
            "q" => break,
            "r" => session.reset(),
            text => {
                if let Some(name) = text.strip_prefix("d ") {
                    match Difficulty::from_name(name.trim()) {
                        Ok(difficulty) => {
                            session.set_difficulty(difficulty);
                            config.difficulty = difficulty;
                            if let Err(e) = config.save(&args.config) {
                                log!("Failed to save preferences: {}", e);
                            }
                            println!("Difficulty set to {}", difficulty.name());
                        }
                        Err(e) => println!("{}", e),
                    }
                } else {
                    match text.parse::<usize>() {
                        Ok(index) => {
                            if let Err(e) = session.human_move(index) {
                                println!("{}", e);
                            }
                        }
                        Err(_) => println!("Enter a cell number between 0 and 8"),
                    }
                }
            }
        }
    }

    log!("Thanks for playing");
    Ok(())
}

fn next_input<B: BufRead>(lines: &mut io::Lines<B>) -> Result<Option<String>, String> {
    match lines.next() {
        None => Ok(None),
        Some(Ok(line)) => Ok(Some(line.trim().to_lowercase())),
        Some(Err(e)) => Err(format!("Failed to read input: {}", e)),
    }
}
