//! Headless puzzle binary.
//!
//! Usage:
//!   cargo run -p puzzle_app -- [--config puzzle.json] [--scramble-turns 50]
//!
//! Runs the animation tick loop and accepts console commands; a windowing
//! frontend would additionally forward pointer events into
//! `PuzzleApp::pointer_event` and paint the projected quads.
//!
//! Console commands:
//!   scramble      - Queue random turns
//!   reset-view    - Restore the default viewing angle
//!   reset-colors  - Restore the solved cube and drop queued turns
//!   status        - Show queue and projection stats
//!   quit          - Exit

use std::env;
use std::io::BufRead;
use std::time::Duration;

use anyhow::Context;
use puzzle_app::PuzzleApp;
use puzzle_core::config::PuzzleConfig;
use puzzle_core::render::NullRenderer;
use tokio::sync::mpsc;
use tracing::info;

fn parse_args() -> anyhow::Result<PuzzleConfig> {
    let mut cfg = PuzzleConfig::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                let text = std::fs::read_to_string(&args[i + 1])
                    .with_context(|| format!("read config {}", args[i + 1]))?;
                cfg = PuzzleConfig::from_json_str(&text).context("parse config")?;
                i += 2;
            }
            "--scramble-turns" if i + 1 < args.len() => {
                cfg.scramble_turns = args[i + 1].parse().context("parse --scramble-turns")?;
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(cfg)
}

fn exec_console(app: &mut PuzzleApp, line: &str) -> String {
    match line {
        "scramble" => {
            if app.scramble() {
                "scrambling".to_string()
            } else {
                "busy: animation in progress".to_string()
            }
        }
        "reset-view" => {
            app.reset_view();
            "view reset".to_string()
        }
        "reset-colors" => {
            app.reset_colors();
            "colors reset".to_string()
        }
        "status" => {
            let (vertices, faces) = app.project();
            format!(
                "pending turns: {}, animating: {}, projected: {} vertices / {} visible quads",
                app.animator.pending(),
                app.animator.is_animating(),
                vertices.len(),
                faces.len(),
            )
        }
        other => format!("unknown command: {other}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = parse_args()?;
    info!(
        cube_count = cfg.cube_count,
        tick_ms = cfg.tick_ms,
        "Starting puzzle"
    );

    let mut app = PuzzleApp::new(cfg.clone());
    let mut renderer = NullRenderer::default();

    // Console input channel fed by a blocking stdin reader thread.
    let (console_tx, mut console_rx) = mpsc::channel::<String>(32);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    println!("Puzzle running. Commands: scramble, reset-view, reset-colors, status, quit.");

    let mut interval = tokio::time::interval(Duration::from_millis(cfg.tick_ms));
    let mut ticks: u64 = 0;

    loop {
        interval.tick().await;
        ticks += 1;

        while let Ok(line) = console_rx.try_recv() {
            if line == "quit" {
                return Ok(());
            }
            println!("{}", exec_console(&mut app, &line));
        }

        if app.tick() {
            app.draw(&mut renderer);
            if ticks % 100 == 0 {
                info!(
                    quads = renderer.last_quad_count,
                    pending = app.animator.pending(),
                    "frame"
                );
            }
        }
    }
}
