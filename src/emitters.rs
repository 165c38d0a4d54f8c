//! Streaming emitters for the chunked and SSE showcases.
//!
//! # Data Flow
//! ```text
//! line_stream:  "line 1" ──sleep──▶ "line 2" ──sleep──▶ ... ──▶ close
//! tick_stream:  Message(1) ──sleep──▶ ... Message(n) ──sleep──▶ Done ──▶ close
//! ```
//!
//! # Design Decisions
//! - Emitters are lazy finite streams; nothing is produced until polled
//! - Each suspension point sits exactly after a write and before the next
//! - Cancellation is the consumer dropping the stream; no cleanup needed
//! - No shared state between invocations, so every request restarts fresh

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures_util::stream::{self, Stream, StreamExt};
use serde::Serialize;
use tokio::time::sleep;

/// One numbered event of the SSE showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickEvent {
    pub counter: u32,
    pub timestamp: u64,
}

/// Frame of the event emitter: numbered ticks, then a closing sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseFrame {
    Message(TickEvent),
    Done,
}

/// Emit the given lines in order, pausing `pause` between consecutive
/// lines. The stream ends after the last line.
pub fn line_stream(lines: Vec<String>, pause: Duration) -> impl Stream<Item = String> {
    stream::iter(lines.into_iter().enumerate()).then(move |(index, line)| async move {
        if index > 0 {
            sleep(pause).await;
        }
        line
    })
}

/// Emit `count` numbered ticks, `pause` apart, then one `Done` sentinel
/// a final `pause` later.
pub fn tick_stream(count: u32, pause: Duration) -> impl Stream<Item = SseFrame> {
    let ticks = stream::iter(1..=count).then(move |counter| async move {
        if counter > 1 {
            sleep(pause).await;
        }
        SseFrame::Message(TickEvent {
            counter,
            timestamp: unix_millis(),
        })
    });

    ticks.chain(stream::once(async move {
        sleep(pause).await;
        SseFrame::Done
    }))
}

/// Milliseconds since the unix epoch.
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
