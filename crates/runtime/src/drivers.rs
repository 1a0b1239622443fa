//! The two producers feeding the event loop.
//!
//! Gravity runs on a tokio interval; keyboard input is pumped on a blocking
//! thread that polls with a short timeout and only reads when a key is
//! available. Neither touches the session: both just send [`LoopEvent`]s and
//! stop once the loop drops its receiver.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::event_loop::LoopEvent;
use crate::input::KeyIntent;

/// How long the input pump waits for a key before re-checking the channel.
pub const INPUT_POLL: Duration = Duration::from_millis(20);

/// Start the gravity driver. The first tick fires one period from now.
pub fn spawn_gravity(tx: mpsc::Sender<LoopEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + period, period);
        // A slow frame delays the next step instead of bursting catch-up ticks.
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            if tx.send(LoopEvent::Gravity).await.is_err() {
                break;
            }
        }
    })
}

/// Terminal events as seen by the input pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
}

/// Non-blocking source of terminal events.
pub trait EventSource: Send + 'static {
    /// Wait at most `timeout` for an event; `Ok(None)` if none arrived.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<TermEvent>>;
}

/// Reads from the real terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<TermEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(match event::read()? {
            Event::Key(key) => Some(TermEvent::Key(key)),
            Event::Resize(_, _) => Some(TermEvent::Resize),
            _ => None,
        })
    }
}

/// Start the input pump on the blocking pool.
///
/// Returns when the receiver is gone, or with the first terminal error. On
/// error the loop is sent [`LoopEvent::Quit`] first, since no key can reach
/// it any more.
pub fn spawn_input_pump<E: EventSource>(
    tx: mpsc::Sender<LoopEvent>,
    mut source: E,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        let result = pump_events(&tx, &mut source);
        if result.is_err() {
            let _ = tx.blocking_send(LoopEvent::Quit);
        }
        result
    })
}

fn pump_events<E: EventSource>(tx: &mpsc::Sender<LoopEvent>, source: &mut E) -> Result<()> {
    while !tx.is_closed() {
        let Some(ev) = source.poll_event(INPUT_POLL)? else {
            continue;
        };
        let out = match ev {
            TermEvent::Key(key) => match KeyIntent::from_event(key) {
                Some(KeyIntent::Action(action)) => LoopEvent::Input(action),
                Some(KeyIntent::Quit) => LoopEvent::Quit,
                None => continue,
            },
            TermEvent::Resize => LoopEvent::Redraw,
        };
        if tx.blocking_send(out).is_err() {
            break;
        }
    }
    Ok(())
}
