mod actions;
mod app;
mod config;
mod constants;
mod events;
mod form;
mod state;
mod ui;
mod worker;

use std::io;
use std::sync::mpsc;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use sa_store::api::StoreClient;

use app::App;
use state::State;
use worker::StoreEvent;

fn main() -> io::Result<()> {
    // Parse CLI args
    let args: Vec<String> = std::env::args().collect();
    let mut api_base: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--api-base" if i + 1 < args.len() => {
                api_base = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: stock-admin [--api-base <url>]");
                std::process::exit(1);
            }
        }
    }

    let api_base = api_base.unwrap_or_else(config::api_base);

    // Panic hook: restore the terminal before the default hook prints.
    // Without this, a panic leaves the terminal in raw mode + alternate
    // screen and the error is unreadable.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(DisableBracketedPaste);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let client = StoreClient::new(api_base.clone());
    let (tx, rx) = mpsc::channel::<StoreEvent>();

    // Create and run app
    let mut app = App::new(State::new(api_base), client, tx);
    let result = app.run(&mut terminal, rx);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}
