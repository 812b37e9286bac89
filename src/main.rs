use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tracing::info;

use parley::app::App;
use parley::backend::TaskClient;
use parley::constants::AI_API_URL;
use parley::conversation::Message;
use parley::events::{handle_key_event, handle_mouse_event, Control};
use parley::ui;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal chat client for an AI task backend")]
struct Cli {
    /// Base URL of the AI backend; falls back to the AI_API_URL environment
    /// variable, then to the empty string (relative requests).
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for AI_API_URL)
    dotenvy::dotenv().ok();

    // The terminal belongs to the TUI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(".", "parley.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = cli.api_url.unwrap_or_else(|| AI_API_URL.clone());
    info!("Starting parley with backend base URL {:?}", base_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = TaskClient::new(base_url);
    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: TaskClient,
) -> Result<()> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(16);

    loop {
        // Apply replies that arrived since the last tick. Each reply may
        // release the next queued submission.
        while let Ok(reply) = reply_rx.try_recv() {
            if let Some(snapshot) = app.apply_reply(reply) {
                dispatch(&client, snapshot, &reply_tx);
            }
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(app, key) {
                    Control::Quit => return Ok(()),
                    Control::Dispatch(snapshot) => dispatch(&client, snapshot, &reply_tx),
                    Control::Continue => {}
                },
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => {}
            }
        }
    }
}

fn dispatch(client: &TaskClient, snapshot: Vec<Message>, reply_tx: &mpsc::Sender<String>) {
    let client = client.clone();
    let tx = reply_tx.clone();
    tokio::spawn(async move {
        let reply = client.send(&snapshot).await;
        // The receiver only drops on shutdown
        let _ = tx.send(reply).await;
    });
}
