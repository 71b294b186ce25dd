//! Workspace maintenance tasks.
//!
//! ```text
//! cargo run -p carousel-xtask -- schema [--out assets/options.schema.json]
//! cargo run -p carousel-xtask -- check-presets [--assets assets]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use carousel::catalog::ModelCatalog;
use carousel::options::Options;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the JSON schema of the options file.
    Schema {
        #[arg(long, default_value = "assets/options.schema.json")]
        out: PathBuf,
    },
    /// Parse every options preset and model catalog under the assets dir.
    CheckPresets {
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
    },
}

fn write_schema(out: &Path) -> Result<()> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(out, schema + "\n")
        .with_context(|| format!("writing {}", out.display()))?;
    log_line(&format!("wrote {}", out.display()));
    Ok(())
}

fn toml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    Ok(files)
}

fn check_presets(assets: &Path) -> Result<()> {
    let mut failures = 0_usize;

    for path in toml_files(&assets.join("presets"))? {
        match Options::load(&path) {
            Ok(_) => log_line(&format!("ok      {}", path.display())),
            Err(e) => {
                failures += 1;
                log_line(&format!("FAILED  {}: {e}", path.display()));
            }
        }
    }

    for path in toml_files(&assets.join("catalogs"))? {
        match ModelCatalog::load(&path) {
            Ok(catalog) => log_line(&format!(
                "ok      {} ({} models)",
                path.display(),
                catalog.len()
            )),
            Err(e) => {
                failures += 1;
                log_line(&format!("FAILED  {}: {e}", path.display()));
            }
        }
    }

    if failures > 0 {
        bail!("{failures} asset file(s) failed to parse");
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn log_line(line: &str) {
    eprintln!("{line}");
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Schema { out } => write_schema(&out),
        Command::CheckPresets { assets } => check_presets(&assets),
    }
}
