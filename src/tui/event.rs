//! Event source for the TUI
//!
//! Terminal input is read on a background thread and forwarded over a
//! channel, interleaved with periodic ticks.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// What the UI loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// A key press
    Key(KeyEvent),
    /// New terminal size
    Resize(u16, u16),
    /// Periodic wake-up
    Tick,
}

/// Receiving end of the input thread
pub struct EventHandler {
    receiver: Receiver<Event>,
    _reader: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Start reading input, ticking every `tick_rate`
    ///
    /// The reader stops when the terminal can no longer be read or when the
    /// handler is dropped; `next` then returns an error.
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let reader = thread::spawn(move || read_input(sender, tick_rate));
        Self {
            receiver,
            _reader: reader,
        }
    }

    /// Block until the next event
    pub fn next(&self) -> Result<Event, RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

fn read_input(sender: Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(e) => {
                tracing::error!(error = %e, "failed to poll terminal input");
                return;
            }
        };

        if ready {
            let forwarded = match event::read() {
                // Some terminals also report releases and repeats
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(Event::Key(key))
                }
                Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                Ok(_) => None,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal input");
                    return;
                }
            };
            if let Some(ev) = forwarded {
                if sender.send(ev).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
