use clap::{Parser, Subcommand};
use shoebox::config::Config;
use shoebox::run::{self, RunMode};

#[derive(Parser)]
#[command(name = "shoebox")]
#[command(version)]
#[command(about = "Ingest photos and videos from removable media into a date-bucketed archive")]
#[command(long_about = "\
Ingest photos and videos from removable media into a date-bucketed archive
with browsable HTML galleries.

Running with no arguments performs a full pass: stale gallery pages are
removed, new media is copied from the card into per-date buckets, missing
thumbnails are rendered, and the gallery pages are rebuilt from the archive
contents. Every phase is idempotent — re-running over an unchanged card
changes nothing.

Archive layout:

  archive/
  ├── index.html                   # Site index, newest day first
  └── 2024-05-01/
      ├── photo/IMG001.JPG
      ├── rawPhoto/IMG001.ARW
      ├── video/CLIP001.MP4
      ├── thumbnails/IMG001.JPG    # Bounded-box preview
      ├── gallery.html             # Generated page for the day
      └── info.txt                 # Optional hand-written title/description

Configuration is read from $SHOEBOX_CONFIG, else ./shoebox.toml, else
built-in defaults. Paths are configuration, not flags.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild thumbnails and gallery pages without touching the card
    Regenerate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let mode = match cli.command {
        Some(Command::Regenerate) => RunMode::RegenerateOnly,
        None => RunMode::Full,
    };

    run::run(&config, mode)?;
    Ok(())
}
