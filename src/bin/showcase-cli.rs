//! Demo client for the showcase API.
//!
//! Synchronous demos print status, the annotator's response headers and
//! the pretty-printed body. Streaming demos decode arriving bytes
//! incrementally and print each unit as it lands, never waiting for the
//! full body.

use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "showcase-cli")]
#[command(about = "Interactive client for the web-showcase demo API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Optional bearer token; the server reads it but never checks it.
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Echo of a static route match
    Basic,
    /// Echo of query-string pairs
    Query,
    /// Echo of captured path parameters
    Params {
        #[arg(default_value = "v2")]
        version: String,
        #[arg(default_value = "42")]
        id: String,
    },
    /// Echo of the HTTP verb on a multi-method route
    Methods {
        #[arg(default_value = "GET")]
        method: String,
    },
    /// Snapshot of middleware-injected state and incoming headers
    Middleware,
    /// Snapshot of the request-scoped context
    Context {
        /// Artificial server-side delay, to watch x-elapsed-ms grow
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Submit a record to the validation demo
    Validate {
        #[arg(long, default_value = "Jane Doe")]
        name: String,
        #[arg(long, default_value = "jane@example.com")]
        email: String,
        #[arg(long)]
        age: Option<f64>,
    },
    /// Consume the chunked plain-text stream
    Stream,
    /// Consume the Server-Sent Events stream
    Sse,
    /// Trigger a fault: http, notfound or server
    Fault {
        #[arg(default_value = "http")]
        kind: String,
    },
    /// Describe the cross-origin policy in effect
    Cors,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(token) = &cli.token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}"))?,
        );
    }

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/health", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Basic => {
            let res = client
                .get(format!("{}/showcase/routing/basic", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Query => {
            let res = client
                .get(format!(
                    "{}/showcase/routing/query?page=2&limit=10&sort=desc",
                    cli.url
                ))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Params { version, id } => {
            let res = client
                .get(format!("{}/showcase/routing/{}/{}", cli.url, version, id))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Methods { method } => {
            let url = format!("{}/showcase/routing/methods", cli.url);
            let request = match method.to_uppercase().as_str() {
                "GET" => client.get(&url),
                "POST" => client.post(&url),
                "PUT" => client.put(&url),
                "DELETE" => client.delete(&url),
                other => {
                    eprintln!("Unsupported method '{other}': use GET, POST, PUT or DELETE");
                    return Ok(());
                }
            };
            print_response(request.headers(headers).send().await?).await?;
        }
        Commands::Middleware => {
            let res = client
                .get(format!("{}/showcase/middleware", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Context { delay_ms } => {
            let mut url = format!("{}/showcase/context", cli.url);
            if let Some(delay) = delay_ms {
                url.push_str(&format!("?delay_ms={delay}"));
            }
            let res = client.get(url).headers(headers).send().await?;
            print_response(res).await?;
        }
        Commands::Validate { name, email, age } => {
            let mut record = json!({"name": name, "email": email});
            if let Some(age) = age {
                record["age"] = json!(age);
            }
            let res = client
                .post(format!("{}/showcase/validation", cli.url))
                .headers(headers)
                .json(&record)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Stream => {
            let res = client
                .get(format!("{}/showcase/streaming", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_meta(&res);
            print_lines(res).await?;
        }
        Commands::Sse => {
            let res = client
                .get(format!("{}/showcase/sse", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_meta(&res);
            print_sse(res).await?;
        }
        Commands::Fault { kind } => {
            let res = client
                .get(format!("{}/showcase/error?type={}", cli.url, kind))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Cors => {
            let res = client
                .get(format!("{}/showcase/cors", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

/// Print status plus the annotator's response headers.
fn print_meta(res: &reqwest::Response) {
    println!("status: {}", res.status());
    for header in ["x-request-id", "x-elapsed-ms"] {
        if let Some(value) = res.headers().get(header) {
            println!("{header}: {}", value.to_str().unwrap_or("<binary>"));
        }
    }
}

/// Print metadata and the pretty body of a synchronous demo.
async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    print_meta(&res);

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(_) => println!("{text}"),
    }
    Ok(())
}

/// Decode a plain-text stream, printing each line as soon as its
/// terminator arrives.
async fn print_lines(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = res.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        buffer.push_str(&String::from_utf8_lossy(&chunk?));
        while let Some(pos) = buffer.find('\n') {
            let line: String = buffer.drain(..=pos).collect();
            println!("<- {}", line.trim_end());
        }
    }
    if !buffer.is_empty() {
        println!("<- {buffer}");
    }
    println!("stream closed");
    Ok(())
}

/// Decode an SSE stream frame by frame, printing each event as its
/// blank-line terminator arrives.
async fn print_sse(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = res.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        buffer.push_str(&String::from_utf8_lossy(&chunk?));
        while let Some(pos) = buffer.find("\n\n") {
            let frame: String = buffer.drain(..pos + 2).collect();
            let mut event = "message";
            let mut data = String::new();
            for line in frame.lines() {
                if let Some(rest) = line.strip_prefix("event: ") {
                    event = rest;
                } else if let Some(rest) = line.strip_prefix("data: ") {
                    data = rest.to_string();
                }
            }
            println!("<- [{event}] {data}");
        }
    }
    println!("event stream closed");
    Ok(())
}
