//! Transcript replay tool - feeds a recorded server transcript through the
//! client and prints what it would have sent back.
//!
//! Transcript format: one server frame per line (`name|arg|...`). Lines
//! starting with `#` are comments. `@click deck` and `@click <entity>`
//! simulate a user gesture at that point of the stream.
//!
//! Usage:
//!   cargo run --release --bin carte-replay -- transcript.txt --no-animations
//!   RUST_LOG=debug cargo run --bin carte-replay -- transcript.txt --config engine.json

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use carte_sync::core::{ContainerKey, EngineConfig, EntityId, PlayerId, Role};
use carte_sync::dispatch::CommandDispatcher;
use carte_sync::games::scala_reale::ScalaRealeClient;
use carte_sync::phase::Clickable;
use carte_sync::surface::CardSurface;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a recorded server transcript through the client")]
struct Args {
    /// Transcript file.
    transcript: PathBuf,

    /// Engine configuration (JSON). Missing fields take defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seat of the local viewer, if the transcript does not announce it.
    #[arg(short, long)]
    seat: Option<u8>,

    /// Complete every transition instantly.
    #[arg(long)]
    no_animations: bool,
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw).context("Failed to parse engine config")?
        }
        None => EngineConfig::default(),
    };
    Ok(if args.no_animations {
        config.with_animations(false)
    } else {
        config
    })
}

fn parse_click(target: &str) -> Result<Clickable> {
    match target.trim() {
        "deck" => Ok(Clickable::Deck),
        entity => {
            let id: u32 = entity
                .parse()
                .with_context(|| format!("Invalid click target '{entity}'"))?;
            Ok(Clickable::Card(EntityId(id)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let transcript = std::fs::read_to_string(&args.transcript)
        .with_context(|| format!("Failed to read transcript {}", args.transcript.display()))?;

    let mut client = ScalaRealeClient::new(config);
    if let Some(seat) = args.seat {
        client.seat(PlayerId::new(seat));
    }
    let mut dispatcher = CommandDispatcher::new(client);

    for (number, line) in transcript.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(target) = line.strip_prefix("@click") {
            let clicked = parse_click(target).with_context(|| format!("line {}", number + 1))?;
            match dispatcher.client_mut().click(clicked) {
                Some(command) => println!("> {command}"),
                None => println!("  (click on {clicked:?} ignored)"),
            }
            continue;
        }
        if line.starts_with('@') {
            bail!("line {}: unknown directive '{line}'", number + 1);
        }

        dispatcher.dispatch_frame(line).await;
    }

    let stats = dispatcher.stats();
    info!(
        handled = stats.handled,
        unknown = stats.unknown,
        failed = stats.failed,
        "replay finished"
    );

    let client = dispatcher.into_client();
    let surface = client.surface();
    println!("deck: {} remaining ({})", surface.deck().remaining(), surface.deck().back());
    println!("discarded: {}", surface.discarded());
    for key in [
        ContainerKey::hand(Role::Viewer),
        ContainerKey::hand(Role::Opponent),
        ContainerKey::TABLE,
        ContainerKey::REVEAL,
    ] {
        let cards: Vec<String> = surface
            .descriptors(key)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{key}: [{}]", cards.join(", "));
    }
    if let Some(phase) = client.phase().phase() {
        println!(
            "phase: {phase} ({})",
            if client.phase().awaiting_input() { "awaiting input" } else { "locked" }
        );
    }
    if let Some(results) = client.results() {
        print!("{results}");
    }

    Ok(())
}
