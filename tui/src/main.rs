//! Carpark TUI Entry Point
//!
//! Launches the terminal status display for the Moondalup carpark.
//!
//! There are no flags: the carpark name, field list and broker parameters
//! are fixed constants. Set RUST_LOG to see feed logs on stderr.

use std::io;
use std::panic;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carpark_core::source::broker;
use carpark_core::{BrokerConfig, JsonDecoder, Panel, ReconnectPolicy, CARPARK_NAME};
use carpark_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never bleed into the alternate screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: carpark-tui requires a terminal (TTY)");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    // Construction errors (bad field list) are fatal: no display is
    // usable without a valid panel.
    let fields = carpark_core::config::display_fields();
    let panel = Panel::new(format!("{CARPARK_NAME}: Parking"), &fields);

    // The feed runs in the background for the life of the process and
    // talks to the app only through the message channel.
    let (feed, mut rx) = broker::spawn(
        BrokerConfig::default(),
        JsonDecoder,
        ReconnectPolicy::default(),
    );

    let mut app = App::new(panel);
    let result = app.run(terminal, &mut rx).await;

    // Signal the feed task; it is abandoned, not joined.
    feed.shutdown();

    result
}
