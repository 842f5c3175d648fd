use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fanlisting::{export, BuildInfo, GreetingPanel, Manifest, PageShell};

/// Render the fanlisting pages.
#[derive(Parser)]
#[command(name = "fanlisting", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page shell
    Shell {
        /// File whose markup is placed in the content region
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Print the greeting panel
    Greeting,
    /// Write every rendered page to a directory
    Export {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// Print the site manifest as JSON
    Manifest,
}

fn emit(output: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered pages can be piped
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    for (name, value) in BuildInfo::current().display_fields() {
        log::debug!("{name}: {value}");
    }

    match cli.command {
        Commands::Shell { content } => {
            let content = match content {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("Error reading {}", path.display()))?,
                None => String::new(),
            };
            emit(&PageShell::default().render_with(&content)?)?;
        }
        Commands::Greeting => emit(&GreetingPanel::default().render()?)?,
        Commands::Export { out } => {
            let written = export::export_site(&out)?;
            log::info!("Exported {} files to {}", written.len(), out.display());
        }
        Commands::Manifest => emit(&Manifest::current().to_json()?)?,
    }
    Ok(())
}
