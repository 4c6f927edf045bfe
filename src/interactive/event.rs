use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Polls crossterm on a background thread and forwards key presses plus
/// periodic ticks over a channel, so the main loop can stay a plain `recv`.
pub struct EventHandler {
    #[allow(dead_code)]
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let sender_clone = sender.clone();

        thread::spawn(move || loop {
            if let Ok(true) = event::poll(Duration::from_millis(tick_rate)) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && sender_clone.send(Event::Key(key)).is_err()
                    {
                        break;
                    }
                }
            }
            if sender_clone.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { sender, receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
