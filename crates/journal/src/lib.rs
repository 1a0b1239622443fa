//! Session journal - line-delimited JSON log of a game
//!
//! The terminal is in raw mode while a game runs, so nothing can be printed.
//! Instead, when `TETRIS_LOG_PATH` is set, the runtime records session
//! events into an append-only file, one JSON object per line:
//!
//! ```text
//! {"type":"start","seed":42,"gravity_ms":500}
//! {"type":"spawn","piece":"o","x":3,"y":0}
//! {"type":"input","action":"moveLeft"}
//! {"type":"lock","lines_cleared":1,"line_clear_score":100,"score":100}
//! {"type":"game_over","score":100,"lines":1,"pieces":12,"abandoned":false}
//! ```
//!
//! Records are handed to a background tokio task over an unbounded channel,
//! so recording never blocks the game loop. A write error stops the writer
//! and the game carries on without a journal; [`Journal::close`] reports it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use term_tetris_types::{GameAction, PieceKind};

/// One journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        seed: Option<u64>,
        gravity_ms: u64,
    },
    Spawn {
        piece: &'static str,
        x: i8,
        y: i8,
    },
    Input {
        action: &'static str,
    },
    Lock {
        lines_cleared: u32,
        line_clear_score: u32,
        score: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        pieces: u32,
        abandoned: bool,
    },
}

impl JournalRecord {
    pub fn spawn(kind: PieceKind, x: i8, y: i8) -> Self {
        JournalRecord::Spawn {
            piece: kind.as_str(),
            x,
            y,
        }
    }

    pub fn input(action: GameAction) -> Self {
        JournalRecord::Input {
            action: action.as_str(),
        }
    }
}

/// Handle to a running journal writer.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    tx: mpsc::UnboundedSender<JournalRecord>,
    writer: JoinHandle<Result<()>>,
}

impl Journal {
    /// Open (or create) `path` for appending and start the writer task.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .with_context(|| format!("opening journal {}", path.display()))?;

        let (tx, mut rx) = mpsc::unbounded_channel::<JournalRecord>();
        let writer = tokio::spawn(async move {
            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                serde_json::to_writer(&mut buf, &rec).context("encoding journal record")?;
                buf.push(b'\n');
                file.write_all(&buf).await.context("writing journal")?;
            }
            file.flush().await.context("flushing journal")?;
            Ok::<_, anyhow::Error>(())
        });

        Ok(Self { path, tx, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Queue a record. Silently dropped if the writer has stopped.
    pub fn record(&self, rec: JournalRecord) {
        let _ = self.tx.send(rec);
    }

    /// Stop accepting records and wait until everything queued is on disk.
    ///
    /// Reports the error that stopped the writer, if any.
    pub async fn close(self) -> Result<()> {
        let Journal { path, tx, writer } = self;
        drop(tx);
        writer
            .await
            .context("journal writer panicked")?
            .with_context(|| format!("journal {}", path.display()))
    }
}

/// Journal that may be disabled; recording into `None` is a no-op.
pub trait RecordSink {
    fn record(&self, rec: JournalRecord);
}

impl RecordSink for Journal {
    fn record(&self, rec: JournalRecord) {
        Journal::record(self, rec);
    }
}

impl<T: RecordSink> RecordSink for Option<T> {
    fn record(&self, rec: JournalRecord) {
        if let Some(sink) = self {
            sink.record(rec);
        }
    }
}
