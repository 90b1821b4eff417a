use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

use new_day::config::Config;
use new_day::scaffold::toolchain::Cargo;
use new_day::{ScaffoldReport, Variant, scaffold_day};

#[derive(Parser)]
#[command(author, version, about = "Scaffold the next day's puzzle project", long_about = None)]
struct Cli {
    /// Workspace holding the day projects (defaults to the configured one)
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    /// Placeholder layout for the new day
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Fail on malformed day entries instead of starting over at day1
    #[arg(long)]
    strict: bool,

    /// Abort when a cargo command fails
    #[arg(long)]
    fail_on_command_error: bool,

    /// Open the new project's main.rs in the configured editor
    #[arg(long)]
    open: bool,

    /// Print the scaffold report as JSON
    #[arg(long)]
    json: bool,

    /// Save the effective settings to the config file
    #[arg(long)]
    save_config: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "new_day=info",
        1 => "new_day=debug",
        _ => "new_day=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?.unwrap_or_default();
    if let Some(workspace) = &cli.workspace {
        config.workspace_dir = workspace.to_string_lossy().into_owned();
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    config.strict |= cli.strict;
    config.fail_on_command_error |= cli.fail_on_command_error;

    if cli.save_config {
        let path = config.save()?;
        tracing::info!("Saved config to {}", path.display());
    }

    let workspace = config.expanded_workspace()?;
    let report = scaffold_day(&workspace, &config.scaffold_options(), &Cargo::default())?;

    if cli.open {
        open_in_editor(&config, &report);
    }

    if cli.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        // Bare path so a shell wrapper can cd into it
        println!("{}", report.project_dir.display());
    }

    Ok(())
}

fn open_in_editor(config: &Config, report: &ScaffoldReport) {
    let Some(editor) = config
        .editor
        .clone()
        .or_else(|| std::env::var("EDITOR").ok())
    else {
        tracing::warn!("No editor configured, set `editor` in the config or $EDITOR");
        return;
    };

    let status = Command::new(&editor)
        .arg(report.main_file())
        .current_dir(&report.project_dir)
        .status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => tracing::warn!("Editor exited with status: {s}"),
        Err(e) => tracing::warn!("Failed to launch editor '{editor}': {e}"),
    }
}
