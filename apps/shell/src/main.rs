//! Terminal demo for the form engine.
//!
//! Reads events from stdin (`input email a@b.co`, `blur email`, `submit`,
//! ...) and renders the engine's callbacks as plain console lines. This is a
//! stand-in collaborator; a real embedding would wire `FormRenderer` to its
//! widget toolkit instead.

// The renderer IS the terminal UI here.
#![allow(clippy::print_stdout)]

use anyhow::Result;
use fgate::{
    FieldKey, FieldState, FormEngine, FormRenderer, MessageKind, StrengthReport, Verdict,
};
use fgate_form::config::load_form_config;
use fgate_logger::{LevelFilter, Logger};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

struct ConsoleRenderer;

impl FormRenderer for ConsoleRenderer {
    fn render_field(&mut self, key: FieldKey, state: FieldState, verdict: &Verdict) {
        let marker = match verdict.kind {
            MessageKind::Error => "✗",
            MessageKind::Success => "✓",
            MessageKind::None => "·",
        };
        let touched = if state.touched { "touched" } else { "untouched" };
        println!("  {marker} [{key}] ({touched}) {}", verdict.message);
    }

    fn render_strength(&mut self, report: &StrengthReport) {
        match report.tier {
            Some(tier) => {
                let filled = usize::from(report.score());
                println!("  strength: [{}{}] {tier}", "#".repeat(filled), "-".repeat(5 - filled));
            },
            None => println!("  strength: [-----] unset"),
        }
    }

    fn render_progress(&mut self, percent: u8) {
        println!("  progress: {percent}%");
    }

    fn render_submit_state(&mut self, eligible: bool, pending: bool) {
        println!("  submit: eligible={eligible} pending={pending}");
    }

    fn on_submit_accepted(&mut self) {
        println!("  >> submitted successfully");
    }

    fn on_submit_rejected(&mut self, reason: &str) {
        println!("  >> submission rejected: {reason}");
    }

    fn on_reset(&mut self) {
        println!("  >> form cleared, focus back on {}", FieldKey::first());
    }

    fn clear_field(&mut self, key: FieldKey) {
        println!("  · [{key}] markers cleared");
    }
}

const HELP: &str = "\
commands:
  input <field> <value...>   value changed (field: fullName | email | password | confirmPassword)
  blur <field>               field lost focus
  focus <field>              field gained focus
  submit                     attempt submission
  reset                      clear the form
  help                       this text
  quit                       exit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _logger =
        Logger::builder(env!("CARGO_PKG_NAME")).console(true).level(LevelFilter::WARN).init()?;

    let config = load_form_config(None::<&str>)?;
    let mut engine = FormEngine::new(config, ConsoleRenderer);
    // The collaborator owns the raw widget values, exactly like a DOM would.
    let mut widget_values: HashMap<FieldKey, String> = HashMap::new();

    println!("fieldgate demo form\n{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "input" | "blur" | "focus" => {
                let Some(key) = parts.next().and_then(|raw| raw.parse::<FieldKey>().ok()) else {
                    println!(
                        "  unknown field; expected fullName, email, password or confirmPassword"
                    );
                    continue;
                };
                match command {
                    "input" => {
                        let value = parts.collect::<Vec<_>>().join(" ");
                        widget_values.insert(key, value.clone());
                        engine.notify_input(key, &value);
                    },
                    "blur" => {
                        let value = widget_values.get(&key).cloned().unwrap_or_default();
                        engine.notify_blur(key, &value);
                    },
                    _ => engine.notify_focus(key),
                }
            },
            "submit" => {
                let _outcome = engine.notify_submit().await;
            },
            "reset" => {
                widget_values.clear();
                engine.notify_reset();
            },
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("  unknown command {other:?}; try `help`"),
        }
    }

    Ok(())
}
