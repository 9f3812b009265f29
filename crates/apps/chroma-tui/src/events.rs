use chroma_core::{AppError, AppResult};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || poll_loop(&tx, tick_rate));
        Self {
            rx,
            _handle: handle,
        }
    }

    pub fn next(&self) -> AppResult<AppEvent> {
        self.rx
            .recv()
            .map_err(|_| AppError::Internal("Event channel closed".into()))
    }
}

/// Forwards key presses and terminal resizes to the shell, with a tick after
/// every poll window so time-based state (notification expiry) keeps moving
/// without input. Key repeats and releases are filtered out here; the shell
/// only ever sees presses.
fn poll_loop(tx: &mpsc::Sender<AppEvent>, tick_rate: Duration) {
    loop {
        let forwarded = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(AppEvent::Key(key))
                }
                Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                _ => None,
            },
            Ok(false) => None,
            Err(_) => {
                // Prevent busy loop on persistent poll errors
                thread::sleep(tick_rate);
                None
            }
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                return;
            }
        }
        if tx.send(AppEvent::Tick).is_err() {
            return;
        }
    }
}
