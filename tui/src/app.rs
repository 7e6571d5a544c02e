//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Render loop on the main task (blocking until quit)
//! - Drains `SourceMessage`s from the background feed each frame
//! - Applies them to the `Panel` and repaints
//!
//! The feed task never touches UI state; everything it produces arrives
//! here through the channel, on this loop's own task. A failed apply
//! (incomplete payload) is logged and the previous values stay visible.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use carpark_core::{FeedState, Panel, SourceMessage};

use crate::ui;

/// Frame interval when nothing else wakes the loop (~10 FPS keeps the
/// status-line clock moving).
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    /// The displayed panel (fields + current values)
    panel: Panel,
    /// Feed connection state for the status line
    feed: FeedState,
    /// When the last update was applied
    last_update: Option<Instant>,
}

impl App {
    /// Create the app around a freshly constructed panel.
    pub fn new(panel: Panel) -> Self {
        Self {
            running: true,
            panel,
            feed: FeedState::Disconnected,
            last_update: None,
        }
    }

    /// The displayed panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Current feed connection state.
    pub fn feed_state(&self) -> FeedState {
        self.feed
    }

    /// Seconds since the last applied update, if any arrived yet.
    pub fn seconds_since_update(&self) -> Option<u64> {
        self.last_update.map(|at| at.elapsed().as_secs())
    }

    /// Whether the render loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    /// Apply one feed message to the display state.
    pub fn apply_message(&mut self, msg: SourceMessage) {
        match msg {
            SourceMessage::Update(payload) => match self.panel.apply(&payload) {
                Ok(()) => {
                    self.last_update = Some(Instant::now());
                    debug!("panel updated");
                }
                Err(e) => {
                    // Feed bug: incomplete payload. Keep showing the last
                    // good values rather than tearing the panel.
                    warn!(error = %e, "dropping incomplete update");
                }
            },
            SourceMessage::Feed(state) => {
                debug!(?state, "feed state changed");
                self.feed = state;
            }
        }
    }

    /// Note that the feed channel closed (the source task is gone).
    pub fn feed_closed(&mut self) {
        self.feed = FeedState::Disconnected;
    }

    /// Main render loop. Blocks the calling task until the user quits.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: &mut mpsc::Receiver<SourceMessage>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut feed_open = true;

        // Initial frame so the placeholders are visible before any update.
        terminal.draw(|frame| ui::draw(frame, self))?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            // Resize repaints on the draw below; other
                            // events carry nothing for this display.
                            _ => {}
                        }
                    }
                }

                // Feed messages
                msg = rx.recv(), if feed_open => {
                    match msg {
                        Some(msg) => self.apply_message(msg),
                        None => {
                            feed_open = false;
                            self.feed_closed();
                        }
                    }
                }

                // Frame tick - keeps the clock on the status line honest
                () = tokio::time::sleep(FRAME_INTERVAL) => {}
            }

            // Drain whatever else is queued so only the newest update gets
            // painted ("most recent call wins").
            while let Ok(msg) = rx.try_recv() {
                self.apply_message(msg);
            }

            terminal.draw(|frame| ui::draw(frame, self))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpark_core::{FieldSet, UpdatePayload, PLACEHOLDER};
    use pretty_assertions::assert_eq;

    fn carpark_app() -> App {
        let fields = FieldSet::new(["Available bays", "Temperature", "At"]).unwrap();
        App::new(Panel::new("Moondalup: Parking", &fields))
    }

    fn full_payload() -> UpdatePayload {
        [
            ("Available bays", "042"),
            ("Temperature", "21\u{2103}"),
            ("At", "14:03:10"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_new_app_shows_placeholders_and_runs() {
        let app = carpark_app();
        assert!(app.is_running());
        assert_eq!(app.feed_state(), FeedState::Disconnected);
        assert_eq!(app.seconds_since_update(), None);
        for row in app.panel().rows() {
            assert_eq!(row.value(), PLACEHOLDER);
        }
    }

    #[test]
    fn test_update_message_refreshes_values() {
        let mut app = carpark_app();
        app.apply_message(SourceMessage::Update(full_payload()));

        assert_eq!(app.panel().value("Available bays"), Some("042"));
        assert_eq!(app.panel().value("Temperature"), Some("21\u{2103}"));
        assert_eq!(app.panel().value("At"), Some("14:03:10"));
        assert!(app.seconds_since_update().is_some());
    }

    #[test]
    fn test_incomplete_update_is_dropped() {
        let mut app = carpark_app();
        let partial: UpdatePayload = [("Available bays", "042")].into_iter().collect();
        app.apply_message(SourceMessage::Update(partial));

        // Nothing changed, and the drop is not fatal.
        for row in app.panel().rows() {
            assert_eq!(row.value(), PLACEHOLDER);
        }
        assert_eq!(app.seconds_since_update(), None);
        assert!(app.is_running());
    }

    #[test]
    fn test_feed_state_messages() {
        let mut app = carpark_app();
        app.apply_message(SourceMessage::Feed(FeedState::Connecting));
        assert_eq!(app.feed_state(), FeedState::Connecting);
        app.apply_message(SourceMessage::Feed(FeedState::Subscribed));
        assert_eq!(app.feed_state(), FeedState::Subscribed);

        app.feed_closed();
        assert_eq!(app.feed_state(), FeedState::Disconnected);
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = carpark_app();
            app.handle_key(key);
            assert!(!app.is_running());
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = carpark_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.is_running());
    }
}
