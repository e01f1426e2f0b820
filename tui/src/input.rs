//! Input handling for the folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use folio_engine::App;
use folio_types::SectionId;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 64; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 32; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking task and hands them to the frame
/// loop through a bounded channel, so the loop itself never blocks on the
/// terminal.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events, so no key press is ever lost.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input, capped per frame. Returns `true` when the user
/// asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if let Event::Key(key) = ev
            && handle_key(app, key)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Dispatch one key press. Returns `true` to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            tracing::debug!("quit requested");
            return true;
        }
        KeyCode::Char('q') => {
            tracing::debug!("quit requested");
            return true;
        }
        KeyCode::Char('1') => app.select(SectionId::Home),
        KeyCode::Char('2') => app.select(SectionId::About),
        KeyCode::Char('3') => app.select(SectionId::Projects),
        KeyCode::Char('4') => app.select(SectionId::Contact),
        KeyCode::Tab | KeyCode::Right => app.select_next(),
        KeyCode::BackTab | KeyCode::Left => app.select_prev(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Enter => app.activate(),
        KeyCode::Esc => app.close_menu(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('g') => app.open_project_github(),
        KeyCode::Char('d') => app.open_project_demo(),
        KeyCode::Char('r') => app.export_resume(),
        KeyCode::Char('i') => app.open_portrait(),
        _ => {}
    }
    false
}
