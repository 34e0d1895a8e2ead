//! Taskpad CLI - to-do lists in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use taskpad_core::{logging, AuthView};

mod output;
mod views;

use views::Flow;

/// Taskpad - to-do lists in your terminal
#[derive(Parser)]
#[command(name = "tp", version, about, long_about = None)]
struct Cli {
    /// Taskpad directory (default: TASKPAD_DIR or ~/.taskpad)
    #[arg(long, env = "TASKPAD_DIR")]
    dir: Option<PathBuf>,

    /// Log level for the file logger (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let taskpad_dir = match cli.dir {
        Some(dir) => dir,
        None => views::get_taskpad_dir()?,
    };

    let mut ctx = views::get_context(&taskpad_dir)?;

    let level = cli
        .log_level
        .or_else(|| ctx.config.log_level.clone())
        .unwrap_or_else(|| logging::default_log_level().to_string());
    if let Err(e) = logging::init(&level, &taskpad_dir) {
        // Logging must never block the app.
        output::warning(&format!("Logging disabled: {e}"));
    }

    // The long-lived view loop: login/register while signed out, the
    // task list while signed in. Only "Quit" ends it.
    loop {
        let flow = if ctx.auth.is_signed_in() {
            views::tasks::run(&mut ctx)?
        } else {
            match ctx.auth.view().unwrap_or_default() {
                AuthView::Login => views::login::run(&mut ctx)?,
                AuthView::Register => views::register::run(&mut ctx)?,
            }
        };

        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
