use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for lumabench", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Ci,
    Bench,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => ci(),
        Commands::Bench => bench(),
    }
}

fn ci() -> Result<()> {
    run_command("cargo", &["fmt", "--all", "--check"])?;
    run_command(
        "cargo",
        &[
            "clippy",
            "--all-targets",
            "--all-features",
            "--",
            "-D",
            "warnings",
            "-A",
            "clippy::needless_range_loop",
        ],
    )?;
    run_command("cargo", &["build", "--all-features"])?;
    run_command("cargo", &["test", "--all-features"])?;
    Ok(())
}

/// Run the full comparison suite; criterion writes reports under target/criterion
fn bench() -> Result<()> {
    run_command("cargo", &["bench", "--bench", "grayscale_transform"])?;
    run_command("cargo", &["bench", "--bench", "threshold_transform"])?;
    Ok(())
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    use std::process::Command;
    let status = Command::new(cmd).args(args).status()?;
    if !status.success() {
        anyhow::bail!("Command failed: {} {}", cmd, args.join(" "));
    }
    Ok(())
}
