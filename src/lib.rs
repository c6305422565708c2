// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod sheet;
pub mod types;

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::{SheetConfig, load_and_validate};
use crate::sheet::{plan_sheets, render_json, render_text};

/// High-level entry point used by `main.rs`.
///
/// Loads the sheets file, plans every selected sheet and prints the result
/// to stdout. A sheet that fails to plan still appears in the output with
/// its error; only unreadable or malformed sheets files fail the run.
pub async fn run(args: CliArgs) -> Result<()> {
    let file = load_and_validate(&args.config)?;
    info!(
        config = %args.config.display(),
        sheets = file.sheets().len(),
        "loaded sheets"
    );

    let sheets: Vec<SheetConfig> = match args.sheet.as_deref() {
        Some(id) => {
            let sheet = file
                .sheet(id)
                .ok_or_else(|| anyhow!("runsheet '{id}' not found in {}", args.config.display()))?;
            vec![sheet.clone()]
        }
        None => file.into_sheets(),
    };

    if args.dry_run {
        print_dry_run(&sheets);
        return Ok(());
    }

    let planned = plan_sheets(sheets).await;
    let output = match args.format {
        OutputFormat::Json => render_json(&planned)?,
        OutputFormat::Text => render_text(&planned),
    };
    println!("{output}");
    Ok(())
}

/// List sheets and their raw task rows without scheduling.
fn print_dry_run(sheets: &[SheetConfig]) {
    println!("runsheet dry-run");
    println!();

    for sheet in sheets {
        println!("sheet {} ({} tasks):", sheet.id, sheet.task.len());
        if let Some(ref start) = sheet.start_time {
            println!("  start_time: {start}");
        }
        for task in sheet.task.iter() {
            println!("  - {}", task.id);
            println!("      assignee: {}", task.assignee);
            match task.duration {
                Some(d) => println!("      duration: {d}"),
                None => println!("      duration: <missing>"),
            }
            if let Some(ref deps) = task.dependees {
                if !deps.is_empty() {
                    println!("      dependees: {deps}");
                }
            }
        }
    }

    debug!("dry-run complete (nothing scheduled)");
}
