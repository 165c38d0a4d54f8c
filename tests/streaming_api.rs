//! Integration tests for the chunked streaming and SSE showcases.

use std::time::Instant;

use futures_util::StreamExt;
use serde_json::Value;
use web_showcase::ShowcaseConfig;

mod common;

/// Split complete SSE frames out of a growing buffer, returning
/// `(event, data)` pairs in arrival order.
fn drain_frames(buffer: &mut String) -> Vec<(String, String)> {
    let mut frames = Vec::new();
    while let Some(pos) = buffer.find("\n\n") {
        let frame: String = buffer.drain(..pos + 2).collect();
        let mut event = "message".to_string();
        let mut data = String::new();
        for line in frame.lines() {
            if let Some(rest) = line.strip_prefix("event: ") {
                event = rest.to_string();
            } else if let Some(rest) = line.strip_prefix("data: ") {
                data = rest.to_string();
            }
        }
        frames.push((event, data));
    }
    frames
}

#[tokio::test]
async fn streaming_emits_every_line_then_closes() {
    let (url, shutdown) = common::spawn_server(common::fast_config()).await;
    let client = common::client();

    let started = Instant::now();
    let res = client
        .get(format!("{url}/showcase/streaming"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let mut stream = res.bytes_stream();
    let mut buffer = String::new();
    let mut lines: Vec<(String, Instant)> = Vec::new();

    while let Some(chunk) = stream.next().await {
        buffer.push_str(&String::from_utf8_lossy(&chunk.unwrap()));
        while let Some(pos) = buffer.find('\n') {
            let line: String = buffer.drain(..=pos).collect();
            lines.push((line.trim_end().to_string(), Instant::now()));
        }
    }
    assert!(buffer.is_empty(), "stream ended mid-line: {buffer:?}");

    // Exactly five lines, in order, each strictly after the previous.
    assert_eq!(lines.len(), 5);
    for (i, (line, _)) in lines.iter().enumerate() {
        assert!(
            line.starts_with(&format!("line {}/5", i + 1)),
            "unexpected line: {line}"
        );
    }
    assert!(lines.windows(2).all(|pair| pair[1].1 >= pair[0].1));

    // Four pauses of 60ms separate the five lines; allow generous slack.
    let elapsed = started.elapsed().as_millis();
    assert!(elapsed >= 150, "lines arrived too fast ({elapsed}ms)");

    shutdown.trigger();
}

#[tokio::test]
async fn sse_emits_numbered_events_then_done() {
    let (url, shutdown) = common::spawn_server(common::fast_config()).await;
    let client = common::client();

    let res = client
        .get(format!("{url}/showcase/sse"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/event-stream"));

    let mut stream = res.bytes_stream();
    let mut buffer = String::new();
    let mut frames = Vec::new();

    while let Some(chunk) = stream.next().await {
        buffer.push_str(&String::from_utf8_lossy(&chunk.unwrap()));
        frames.extend(drain_frames(&mut buffer));
    }

    assert_eq!(frames.len(), 7, "frames: {frames:?}");

    for (i, (event, data)) in frames[..6].iter().enumerate() {
        assert_eq!(event, "message");
        let payload: Value = serde_json::from_str(data).unwrap();
        assert_eq!(payload["counter"], i as u64 + 1);
        assert!(payload["timestamp"].as_u64().unwrap() > 0);
    }

    let (event, data) = &frames[6];
    assert_eq!(event, "done");
    let payload: Value = serde_json::from_str(data).unwrap();
    assert_eq!(payload["done"], true);

    shutdown.trigger();
}

#[tokio::test]
async fn sse_timestamps_and_counters_increase_together() {
    let (url, shutdown) = common::spawn_server(common::fast_config()).await;
    let client = common::client();

    let res = client
        .get(format!("{url}/showcase/sse"))
        .send()
        .await
        .unwrap();

    let mut stream = res.bytes_stream();
    let mut buffer = String::new();
    let mut messages: Vec<Value> = Vec::new();

    while let Some(chunk) = stream.next().await {
        buffer.push_str(&String::from_utf8_lossy(&chunk.unwrap()));
        for (event, data) in drain_frames(&mut buffer) {
            if event == "message" {
                messages.push(serde_json::from_str(&data).unwrap());
            }
        }
    }

    let counters: Vec<u64> = messages.iter().map(|m| m["counter"].as_u64().unwrap()).collect();
    assert_eq!(counters, vec![1, 2, 3, 4, 5, 6]);

    let stamps: Vec<u64> = messages
        .iter()
        .map(|m| m["timestamp"].as_u64().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));

    shutdown.trigger();
}

#[tokio::test]
async fn abandoning_a_stream_leaves_the_server_healthy() {
    let mut config = ShowcaseConfig::default();
    config.streaming.line_count = 50;
    config.streaming.line_interval_ms = 50;
    let (url, shutdown) = common::spawn_server(config).await;
    let client = common::client();

    // Read only the first chunk, then drop the connection mid-stream.
    let res = client
        .get(format!("{url}/showcase/streaming"))
        .send()
        .await
        .unwrap();
    let mut stream = res.bytes_stream();
    let first = stream.next().await;
    assert!(first.is_some());
    drop(stream);

    // Emission must stop quietly; the server keeps serving.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let res = client.get(format!("{url}/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    shutdown.trigger();
}
