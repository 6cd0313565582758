use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufReader},
    num::NonZeroUsize,
    path::PathBuf,
    sync::mpsc::{self, Receiver},
    thread::JoinHandle,
};

use sentinel_browser::{
    config::{BrowserConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_HOMEPAGE},
    display::{run_display, DisplayEvent},
    engine::{Engine, Mode},
};

#[derive(Parser, Debug)]
#[command(name = "sentinel-browser")]
#[command(about = "Browser history and bookmarks kept in sentinel linked lists")]
struct Args {
    /// File of commands, one per line. Runs interactively when omitted.
    file: Option<PathBuf>,

    /// Site visited on startup and after clearing the history
    #[arg(long, default_value = DEFAULT_HOMEPAGE)]
    homepage: String,

    /// Maximum number of history entries kept
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: NonZeroUsize,
}

fn run_display_thread(
    display_event_receiver: Receiver<DisplayEvent>,
) -> JoinHandle<Result<()>> {
    std::thread::spawn(move || run_display(display_event_receiver))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = BrowserConfig {
        homepage: args.homepage,
        history_limit: args.history_limit,
    };

    let (display_event_sender, display_event_receiver) = mpsc::channel();
    let display_thread = run_display_thread(display_event_receiver);

    let session = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open command file {}", path.display()))?;
            log::info!("Running commands from {}.", path.display());
            display_event_sender.send(DisplayEvent::Info(format!(
                "Using file {} as input.",
                path.display()
            )))?;
            display_event_sender.send(DisplayEvent::Blank)?;
            Engine::init(&config, Mode::Script).run(BufReader::new(file), &display_event_sender)
        }
        None => {
            Engine::init(&config, Mode::Interactive).run(io::stdin().lock(), &display_event_sender)
        }
    };

    drop(display_event_sender);
    display_thread
        .join()
        .map_err(|_| anyhow!("Display thread panicked."))??;
    session
}
