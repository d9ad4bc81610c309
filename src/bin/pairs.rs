//! # pairs
//!
//! Terminal front end for the memory game. Reads one command per line,
//! feeds it to the engine, prints every announcement, and redraws the grid.
//!
//! ## Usage
//!
//! ```bash
//! pairs --level 2
//! pairs --level expert
//! pairs --rows 4 --cols 5 --seed 7
//! RUST_LOG=memory_pairs=debug pairs --mute
//! ```

use std::io::{self, BufRead, Write};
use std::thread;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memory_pairs::{
    AnnouncementSink, CardFace, Cue, Direction, EngineConfig, Entropy, GameEngine, GameRng,
    IdentityEntropy, InputEvent, Phase, Position,
};

/// Accessible memory game in the terminal.
#[derive(Parser, Debug)]
#[command(name = "pairs", version, about)]
struct Cli {
    /// Seed for dealing cards (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Library level to preselect, by number (1-6) or name
    #[arg(long, default_value = "1")]
    level: String,

    /// Custom grid rows, clamped to 2-10
    #[arg(long, requires = "cols")]
    rows: Option<i64>,

    /// Custom grid columns, clamped to 2-10
    #[arg(long, requires = "rows")]
    cols: Option<i64>,

    /// Disable audio cues
    #[arg(long)]
    mute: bool,

    /// Deal cards in pool order without shuffling
    #[arg(long)]
    no_shuffle: bool,
}

/// Prints announcements as a screen reader would speak them.
struct ConsoleSink;

impl AnnouncementSink for ConsoleSink {
    fn announce(&mut self, message: &str, cue: Option<Cue>) {
        match cue {
            Some(cue) => {
                let tones: Vec<String> = cue
                    .tones()
                    .iter()
                    .map(|t| format!("{}Hz/{}ms", t.frequency_hz, t.duration_ms))
                    .collect();
                println!("  » {}  ♪ {} [{}]", message, cue, tones.join(" "));
            }
            None => println!("  » {}", message),
        }
    }
}

type Engine = GameEngine<ConsoleSink, Box<dyn Entropy>>;

enum Command {
    Input(InputEvent),
    Levels,
    Help,
    Quit,
    Unknown(String),
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "memory_pairs=warn".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::default();
    if cli.mute {
        config = config.muted();
    }

    let entropy: Box<dyn Entropy> = if cli.no_shuffle {
        Box::new(IdentityEntropy)
    } else {
        let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        tracing::info!(seed = rng.seed(), "dealing with seeded RNG");
        Box::new(rng)
    };

    let mut engine: Engine = GameEngine::with_entropy(config, ConsoleSink, entropy);

    println!("Accessible Memory Game");
    println!("Find the matching pairs. Type `help` for commands.\n");

    match (cli.rows, cli.cols) {
        (Some(rows), Some(cols)) => {
            engine.submit_custom_level(rows, cols);
        }
        _ => match level_index(&engine, &cli.level) {
            Some(index) => engine.choose_level(index),
            None => println!("  ? No level called `{}`. Type `levels`.", cli.level),
        },
    }

    if let Err(err) = run(&mut engine) {
        tracing::error!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(engine);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match parse(engine, &line?) {
            Command::Input(event) => {
                if let Err(err) = engine.handle(event) {
                    println!("  ! {}", err);
                }
                settle(engine);
            }
            Command::Levels => print_levels(engine),
            Command::Help => print_help(),
            Command::Quit => return Ok(()),
            Command::Unknown(word) => println!("  ? Unknown command `{}`. Type `help`.", word),
        }
    }
}

/// Sleep through any open reveal window so its outcome is heard.
fn settle(engine: &mut Engine) {
    while let Some(wait) = engine.time_until_deadline() {
        thread::sleep(wait);
        engine.advance(wait);
    }
}

/// Resolve a one-based level number or a level name to a catalog index.
fn level_index(engine: &Engine, word: &str) -> Option<usize> {
    match word.parse::<usize>() {
        Ok(n) => n.checked_sub(1),
        Err(_) => engine.catalog().find(word),
    }
}

fn parse(engine: &Engine, line: &str) -> Command {
    let words: Vec<&str> = line.split_whitespace().collect();
    let number = |i: usize| words.get(i).and_then(|w| w.parse::<i64>().ok());

    let event = match words.first().map(|w| w.to_ascii_lowercase()).as_deref() {
        None | Some("x" | "enter" | "space" | "select") => InputEvent::Select,
        Some("w" | "k" | "up") => InputEvent::Move(Direction::Up),
        Some("s" | "j" | "down") => InputEvent::Move(Direction::Down),
        Some("a" | "h" | "left") => InputEvent::Move(Direction::Left),
        Some("d" | "l" | "right") => InputEvent::Move(Direction::Right),
        Some("start" | "again" | "play") => InputEvent::Start,
        Some("menu") => InputEvent::ReturnToMenu,
        Some("click") => match (number(1), number(2)) {
            (Some(row), Some(col)) if row >= 1 && col >= 1 => {
                InputEvent::SelectCell(Position::new(row as usize - 1, col as usize - 1))
            }
            _ => return Command::Unknown(line.trim().to_string()),
        },
        Some("level") => match words.get(1).and_then(|w| level_index(engine, w)) {
            Some(index) => InputEvent::ChooseLevel(index),
            None => return Command::Unknown(line.trim().to_string()),
        },
        Some("custom") => match (number(1), number(2)) {
            (Some(rows), Some(cols)) => InputEvent::SubmitCustomLevel { rows, cols },
            _ => return Command::Unknown(line.trim().to_string()),
        },
        Some("levels") => return Command::Levels,
        Some("help" | "?") => return Command::Help,
        Some("quit" | "q" | "exit") => return Command::Quit,
        Some(other) => return Command::Unknown(other.to_string()),
    };
    Command::Input(event)
}

fn render(engine: &Engine) {
    let snapshot = engine.snapshot();
    match snapshot.phase {
        Phase::Menu => {
            let level = &snapshot.level;
            println!("\n[Menu] Selected: {} ({})", level.name, level.description);
            println!("Type `start` to play, `levels` to list levels.");
        }
        Phase::Complete => {
            println!("\n[Complete] {}", engine.status_line());
            println!("Type `again` to replay or `menu` to choose another level.");
        }
        Phase::Playing(_) => {
            println!("\n{} level | {}", snapshot.level.name, engine.status_line());
            for row in 0..snapshot.level.rows {
                let cells: Vec<String> = snapshot
                    .row(row)
                    .enumerate()
                    .map(|(col, card)| {
                        let glyph = match card.face() {
                            CardFace::Hidden => "??".to_string(),
                            CardFace::Showing | CardFace::Matched => engine
                                .pool()
                                .get(card.card_id)
                                .map_or_else(|| "!!".to_string(), |def| def.icon.clone()),
                        };
                        let here = snapshot.cursor == Position::new(row, col);
                        let marker = match (here, card.face()) {
                            (true, _) => ('[', ']'),
                            (false, CardFace::Matched) => ('(', ')'),
                            _ => (' ', ' '),
                        };
                        format!("{}{}{}", marker.0, glyph, marker.1)
                    })
                    .collect();
                println!("  {}", cells.join(""));
            }
        }
    }
}

fn print_levels(engine: &Engine) {
    for (i, level) in engine.catalog().iter().enumerate() {
        println!("  {}. {} - {}", i + 1, level.name, level.description);
    }
    println!("  custom R C - your own grid, 2 to 10 each way");
}

fn print_help() {
    println!(
        "  w/a/s/d (or arrows as up/down/left/right)  move
  enter (empty line) or x                    turn over the card
  click R C                                   turn over row R, column C
  start / again                               start or replay the level
  menu                                        back to the level menu
  level N|NAME / custom R C / levels          choose a level
  quit                                        leave"
    );
}
