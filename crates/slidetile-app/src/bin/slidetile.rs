//! Sliding-tile puzzle in the terminal.
//!
//! Resumes the saved game from the data directory unless `--new` is given.
//! Type a tile number to slide it into the blank.

use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
};

use clap::Parser;
use slidetile_app::{
    command::{self, Command, HELP},
    error::AppError,
    gallery,
    observer::PersistingObserver,
    settings::{Settings, Theme},
    store::{JsonFileStore, Store as _},
    text_view,
};
use slidetile_game::{Difficulty, Game, MoveOutcome, Session, Timestamp, UndoOutcome};
use slidetile_generator::{ShuffleGenerator, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding settings.json and game.json.
    #[arg(long, value_name = "DIR", default_value = ".slidetile")]
    data_dir: PathBuf,

    /// Difficulty of a new game (easy, medium or hard). Also becomes the default.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Image reference for a new game. A preset is picked if omitted.
    #[arg(long)]
    image: Option<String>,

    /// Player name to store.
    #[arg(long)]
    name: Option<String>,

    /// Colour theme to store.
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Seed for the shuffle of a new game (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<ShuffleSeed>,

    /// Start a new game even if one is saved.
    #[arg(long)]
    new: bool,
}

fn main() -> Result<(), AppError> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let store = JsonFileStore::new(&args.data_dir);
    let settings = store.load_settings()?.unwrap_or_default();
    let resumed = if args.new || args.seed.is_some() {
        None
    } else {
        load_saved_game(&store)
    };

    let mut observer = PersistingObserver::new(store, settings);
    if args.name.is_some() || args.theme.is_some() || args.difficulty.is_some() {
        observer.update_settings(|settings| apply_args(settings, &args));
    }

    let game = match resumed {
        Some(game) => {
            println!("resuming saved game");
            game
        }
        None => {
            let game = new_game(&args, observer.settings());
            observer.save_game(&game);
            game
        }
    };

    greet(observer.settings());
    let mut session = Session::new(game, observer);
    show(session.game());

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => run(&mut session, command),
            Err(command::ParseCommandError::Empty) => {}
            Err(err) => println!("{err}"),
        }
        prompt()?;
    }
    Ok(())
}

fn load_saved_game(store: &JsonFileStore) -> Option<Game> {
    let saved = match store.load_game() {
        Ok(saved) => saved?,
        Err(err) => {
            log::warn!("ignoring saved game: {err}");
            return None;
        }
    };
    Game::from_saved(saved).ok()
}

fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(name) = &args.name {
        settings.user_name.clone_from(name);
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(difficulty) = args.difficulty {
        settings.default_difficulty = difficulty;
    }
}

fn new_game(args: &Args, settings: &Settings) -> Game {
    let difficulty = args.difficulty.unwrap_or(settings.default_difficulty);
    let image = args
        .image
        .clone()
        .unwrap_or_else(|| gallery::random_image().to_owned());
    let generator = ShuffleGenerator::new();
    let shuffle = match args.seed {
        Some(seed) => generator.generate_with_seed(difficulty.grid_size(), seed),
        None => generator.generate(difficulty.grid_size()),
    };
    log::info!("new {difficulty} game, seed {}", shuffle.seed);
    Game::from_shuffle(&shuffle, image, Timestamp::now())
}

fn greet(settings: &Settings) {
    let name = if settings.user_name.is_empty() {
        "player"
    } else {
        settings.user_name.as_str()
    };
    println!("hello, {name} (theme: {})", settings.theme);
    for (difficulty, time) in settings.best_times.iter() {
        println!("best {difficulty}: {}", text_view::format_duration(time));
    }
}

fn show(game: &Game) {
    print!("{}", text_view::render_grid(game));
    println!("{}", text_view::render_status(game, game.elapsed(Timestamp::now())));
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn run(session: &mut Session<PersistingObserver<JsonFileStore>>, command: Command) {
    match command {
        Command::Move(id) => match session.apply_move(id) {
            Ok(MoveOutcome::Moved { .. }) => {
                show(session.game());
                if let Some(completion) = session.observer_mut().take_completion() {
                    println!(
                        "solved in {} moves, {}",
                        completion.moves,
                        text_view::format_duration(completion.elapsed)
                    );
                    if completion.new_record {
                        println!("new best time!");
                    }
                    println!("type r for a new game or q to quit");
                }
            }
            Ok(MoveOutcome::Ignored(reason)) => println!("{reason}"),
            Err(err) => println!("{err}"),
        },
        Command::Undo => match session.undo() {
            UndoOutcome::Undone => show(session.game()),
            UndoOutcome::Ignored(reason) => println!("{reason}"),
        },
        Command::Reset => {
            session.reset();
            show(session.game());
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}
