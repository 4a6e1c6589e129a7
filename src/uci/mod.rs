//! Minimal UCI front-end.
//!
//! Maps text lines onto the [`Engine`](crate::engine::Engine) façade.
//! Only the command subset a GUI needs to drive the engine is
//! implemented; unknown commands are ignored, as the protocol asks.

use std::io::{self, BufRead, Write};
use std::sync::atomic::Ordering;

use log::debug;

use crate::board::STARTPOS_FEN;
use crate::engine::Engine;
use crate::search::{Limits, MATE, MATE_BOUND};

/// Read commands from stdin until `quit`.
pub fn run_loop() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = Engine::new();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match handle_command(&mut engine, &line, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                debug!("io error on '{line}': {err}");
                break;
            }
        }
    }
}

/// Handle one command line; returns `Ok(false)` on `quit`.
pub fn handle_command(
    engine: &mut Engine,
    line: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&command) = tokens.first() else {
        return Ok(true);
    };

    match command {
        "uci" => {
            writeln!(out, "id name basalt")?;
            writeln!(out, "id author the basalt developers")?;
            writeln!(out, "uciok")?;
        }
        "isready" => {
            // Nothing to wait for; the engine is fully in-memory.
            if engine.ready() {
                writeln!(out, "readyok")?;
            }
        }
        "ucinewgame" => engine.new_game(),
        "position" => cmd_position(engine, &tokens, out)?,
        "go" => cmd_go(engine, &tokens, out)?,
        "stop" => engine.stop_handle().store(true, Ordering::Relaxed),
        "quit" => return Ok(false),
        _ => {}
    }

    Ok(true)
}

fn cmd_position(engine: &mut Engine, tokens: &[&str], out: &mut impl Write) -> io::Result<()> {
    let mut i = 1;
    let fen: String;

    match tokens.get(i) {
        Some(&"startpos") => {
            fen = STARTPOS_FEN.to_string();
            i += 1;
        }
        Some(&"fen") => {
            i += 1;
            let mut fields = Vec::new();
            while i < tokens.len() && tokens[i] != "moves" {
                fields.push(tokens[i]);
                i += 1;
            }
            fen = fields.join(" ");
        }
        _ => return Ok(()),
    }

    let moves: &[&str] = if tokens.get(i) == Some(&"moves") {
        &tokens[i + 1..]
    } else {
        &[]
    };

    if let Err(err) = engine.set_position(&fen, moves) {
        writeln!(out, "info string invalid fen: {err}")?;
    }
    Ok(())
}

fn cmd_go(engine: &mut Engine, tokens: &[&str], out: &mut impl Write) -> io::Result<()> {
    let mut limits = Limits::default();

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                if let Some(d) = tokens.get(i + 1).and_then(|v| v.parse().ok()) {
                    limits.depth = d;
                    i += 1;
                }
            }
            "movetime" => {
                if let Some(ms) = tokens.get(i + 1).and_then(|v| v.parse().ok()) {
                    limits.movetime_ms = ms;
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let report = engine.search(&limits);

    let elapsed = report.elapsed_ms.max(1);
    let nps = report.nodes * 1000 / elapsed;

    write!(
        out,
        "info depth {} nodes {} nps {} time {}",
        report.depth, report.nodes, nps, report.elapsed_ms
    )?;
    write!(out, " score {}", format_score(report.score))?;
    writeln!(out)?;

    match report.best_move {
        Some(mv) => writeln!(out, "bestmove {mv}")?,
        None => writeln!(out, "bestmove 0000")?,
    }
    Ok(())
}

/// UCI score field: centipawns, or "mate N" near the mate boundary.
fn format_score(score: i32) -> String {
    if score.abs() >= MATE_BOUND {
        // score = ±(MATE - ply), so ply = MATE - |score|.
        let ply = MATE - score.abs();
        let mate_in = (ply + 1) / 2;
        let signed = if score > 0 { mate_in } else { -mate_in };
        format!("mate {signed}")
    } else {
        format!("cp {score}")
    }
}
