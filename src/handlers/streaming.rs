//! Streaming showcases: chunked plain text and Server-Sent Events.

use std::convert::Infallible;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::sse::{Event, Sse};
use axum::response::IntoResponse;
use futures_util::stream::{Stream, StreamExt};
use serde_json::json;

use crate::emitters::{self, SseFrame};
use crate::http::server::AppState;

/// `GET /showcase/streaming`: a chunked text/plain body whose lines
/// arrive one pause apart.
pub async fn plain_lines(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    note_bearer(&headers, "streaming");

    let cadence = &state.config.streaming;
    let total = cadence.line_count;
    let lines: Vec<String> = (1..=total)
        .map(|i| format!("line {i}/{total}: written and flushed before the next pause\n"))
        .collect();

    let stream = emitters::line_stream(lines, Duration::from_millis(cadence.line_interval_ms))
        .map(|line| Ok::<_, Infallible>(line.into_bytes()));

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(stream),
    )
}

/// `GET /showcase/sse`: numbered `message` events, then one `done`.
pub async fn server_sent_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    note_bearer(&headers, "sse");

    let cadence = &state.config.streaming;
    let stream = emitters::tick_stream(
        cadence.event_count,
        Duration::from_millis(cadence.event_interval_ms),
    )
    .map(|frame| {
        Ok(match frame {
            SseFrame::Message(tick) => Event::default().event("message").data(
                json!({"counter": tick.counter, "timestamp": tick.timestamp}).to_string(),
            ),
            SseFrame::Done => Event::default()
                .event("done")
                .data(json!({"done": true}).to_string()),
        })
    });

    Sse::new(stream)
}

/// A bearer token on the streaming demos is observed, never validated.
fn note_bearer(headers: &HeaderMap, demo: &'static str) {
    let bearer_present = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Bearer "))
        .unwrap_or(false);

    tracing::debug!(demo, bearer_present, "Streaming demo requested");
}
