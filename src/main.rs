use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lockpick::build_info;
use lockpick::cli::Cli;
use lockpick::constants::TICK_INTERVAL_MS;
use lockpick::input::{map_key, InputResult};
use lockpick::lock::{process_input, LockGame};
use lockpick::logging::{self, LogTarget};
use lockpick::plain::{self, PlainOptions};
use lockpick::ui::draw_ui;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    // Logs on stderr would corrupt the alternate screen
    let target = match (&cli.log_file, cli.plain) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    };
    logging::init(target, &cli.log_level)?;

    let mut rng = cli.rng();
    info!(seeded = cli.seed.is_some(), plain = cli.plain, "lockpick starting");

    if cli.plain {
        let opts = PlainOptions {
            reveal: cli.reveal,
            json: cli.json,
        };
        let stdin = io::stdin();
        return plain::run(stdin.lock(), &mut io::stdout(), &mut rng, opts);
    }

    run_tui(&mut rng, cli.reveal)
}

fn run_tui<R: Rng>(rng: &mut R, reveal: bool) -> io::Result<()> {
    let mut game = LockGame::new(rng, reveal);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_loop(&mut terminal, &mut game, rng);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn game_loop<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut LockGame,
    rng: &mut R,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, game))?;

        if !event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            continue;
        }
        if let Event::Key(key_event) = event::read()? {
            match map_key(key_event) {
                InputResult::Quit => {
                    info!(session = %game.session.id(), status = game.session.status().name(), "quit");
                    return Ok(());
                }
                InputResult::Pad(input) => {
                    process_input(game, input, rng);
                }
                InputResult::Ignore => {}
            }
        }
    }
}
