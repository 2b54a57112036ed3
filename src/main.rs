use std::path::PathBuf;
use std::time::Duration;

use career_mentor::app::App;
use career_mentor::config::{MentorMode, load_config};
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

/// UI tick; also paces the spinner
const TICK_RATE: Duration = Duration::from_millis(50);

/// AI career suggestions from your interests and skills
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Use the built-in mock suggestions (no network, no API key)
    #[arg(long, conflicts_with = "live")]
    mock: bool,

    /// Ask an OpenAI-compatible API (the key is entered in the form)
    #[arg(long)]
    live: bool,

    /// Config file to use instead of ~/.config/career-mentor/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let config_result = load_config(args.config.as_deref());
    let mut config = config_result.config;
    if args.mock {
        config.mentor.mode = MentorMode::Mock;
    } else if args.live {
        config.mentor.mode = MentorMode::Live;
    }

    let mut app = App::new(&config);
    app.start_worker(&config.mentor);
    if let Some(warning) = config_result.warning {
        app.notification.show_destructive("Config Warning", &warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Only process key press events (avoid duplicates)
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("career-mentor.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
