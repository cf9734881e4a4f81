use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use trivia::config::Config;
use trivia::content::{load_game, sample_game, GameCatalog};
use trivia::game::GameDocument;
use trivia::input::{
    handle_game_input, handle_game_mouse, handle_select_input, InputResult, SelectResult,
};
use trivia::logging::{self, LogTarget};
use trivia::session::Session;
use trivia::terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui};
use trivia::ui::game_scene::render_game;
use trivia::ui::game_select::GameSelectScreen;
use trivia::{build_info, Result};

/// Terminal trivia board game
#[derive(Parser, Debug)]
#[command(name = "trivia", disable_version_flag = true)]
struct Cli {
    /// Game file to play directly, skipping game select
    path: Option<PathBuf>,

    /// Directory to scan for game files (overrides config)
    #[arg(long, env = "TRIVIA_GAMES_DIR")]
    games_dir: Option<String>,

    /// Play the built-in sample game
    #[arg(long, conflicts_with = "path")]
    sample: bool,

    /// List games in the games directory and exit
    #[arg(long)]
    list: bool,

    /// Validate a game file and exit
    #[arg(long, value_name = "PATH")]
    validate: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load()?;
    let games_dir = match &cli.games_dir {
        Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
        None => config.games_dir()?,
    };

    if let Some(path) = &cli.validate {
        logging::init(LogTarget::Stderr, cli.verbose)?;
        return Ok(validate_command(path));
    }

    if cli.list {
        logging::init(LogTarget::Stderr, cli.verbose)?;
        list_command(&games_dir);
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(LogTarget::File(&config.log_file()?), cli.verbose)?;
    tracing::info!(version = %build_info::version_line(), "starting");

    // Direct play scans the catalog only if the player goes back to it
    let mut app = if cli.sample {
        App::playing(config, games_dir, sample_game())
    } else if let Some(path) = &cli.path {
        let doc = load_game(path)?;
        App::playing(config, games_dir, doc)
    } else {
        let catalog = GameCatalog::scan(&games_dir);
        if catalog.is_empty() {
            tracing::info!(dir = %games_dir.display(), "no games found, starting sample game");
            App::playing(config, games_dir, sample_game())
        } else {
            App::selecting(config, catalog)
        }
    };

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;

    result.map(|_| ExitCode::SUCCESS)
}

fn validate_command(path: &Path) -> ExitCode {
    match load_game(path) {
        Ok(doc) => {
            println!(
                "{}: ok ({}, {} levels)",
                path.display(),
                doc.title,
                doc.levels.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn list_command(games_dir: &Path) {
    let catalog = GameCatalog::scan(games_dir);
    if catalog.is_empty() {
        println!("No games found in {}", games_dir.display());
        return;
    }
    for entry in &catalog.entries {
        match &entry.error {
            None => println!(
                "{:<24} {:<32} {} levels",
                entry.id, entry.title, entry.level_count
            ),
            Some(error) => println!("{:<24} [INVALID] {}", entry.path.display(), error),
        }
    }
}

enum Screen {
    GameSelect,
    Game(Box<Session>),
}

struct App {
    config: Config,
    /// Empty with `scanned == false` until game select is first shown.
    catalog: GameCatalog,
    scanned: bool,
    select_screen: GameSelectScreen,
    screen: Screen,
    quit: bool,
}

impl App {
    fn selecting(config: Config, catalog: GameCatalog) -> Self {
        Self {
            config,
            catalog,
            scanned: true,
            select_screen: GameSelectScreen::new(),
            screen: Screen::GameSelect,
            quit: false,
        }
    }

    fn playing(config: Config, games_dir: PathBuf, doc: GameDocument) -> Self {
        let session = Session::new(doc, &config);
        Self {
            config,
            catalog: GameCatalog {
                dir: games_dir,
                entries: Vec::new(),
            },
            scanned: false,
            select_screen: GameSelectScreen::new(),
            screen: Screen::Game(Box::new(session)),
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        while !self.quit {
            terminal.draw(|f| {
                let area = f.size();
                match &self.screen {
                    Screen::GameSelect => self.select_screen.draw(f, area, &self.catalog),
                    Screen::Game(session) => render_game(f, area, session),
                }
            })?;

            if !event::poll(tick_rate)? {
                continue;
            }
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
                Event::Mouse(mouse) => self.on_mouse(mouse, terminal.size()?),
                _ => {}
            }
        }

        tracing::info!("quitting");
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::GameSelect => {
                match handle_select_input(key, &mut self.select_screen, &self.catalog) {
                    SelectResult::Continue => {}
                    SelectResult::Play(index) => self.start_game(index),
                    SelectResult::Rescan => self.rescan(),
                    SelectResult::Quit => self.quit = true,
                }
            }
            Screen::Game(session) => {
                let result = handle_game_input(key, session);
                self.apply(result);
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if let Screen::Game(session) = &mut self.screen {
            let result = handle_game_mouse(mouse, session, screen);
            self.apply(result);
        }
    }

    fn apply(&mut self, result: InputResult) {
        match result {
            InputResult::Continue => {}
            InputResult::BackToSelect => {
                if !self.scanned {
                    self.rescan();
                }
                if self.catalog.is_empty() {
                    self.quit = true;
                } else {
                    self.screen = Screen::GameSelect;
                }
            }
            InputResult::Quit => self.quit = true,
        }
    }

    fn start_game(&mut self, index: usize) {
        let Some(entry) = self.catalog.entries.get(index) else {
            return;
        };
        match entry.load() {
            Ok(doc) => self.screen = Screen::Game(Box::new(Session::new(doc, &self.config))),
            // The file may have changed since the scan
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to load game");
                self.catalog.entries[index].error = Some(e.to_string());
            }
        }
    }

    fn rescan(&mut self) {
        self.catalog = GameCatalog::scan(&self.catalog.dir);
        self.scanned = true;
        self.select_screen.clamp(self.catalog.entries.len());
    }
}
