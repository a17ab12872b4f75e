//! QuickResume CLI
//!
//! Usage:
//!   quickresume [OPTIONS]
//!
//! Options:
//!   -s, --store <DIR>       Profile store directory (default: .quickresume)
//!   -p, --profile <FILE>    Read a profile JSON file instead of the store
//!       --sample            Use the built-in sample profile
//!   -t, --theme <NAME>      Override the profile's theme by name
//!       --html <FILE>       Write the standalone HTML snapshot
//!       --pdf <FILE>        Write the paginated PDF
//!   -c, --config <FILE>     Export geometry (TOML)
//!       --themes            List available themes
//!   -h, --help              Print help

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use quickresume::export::{export_pdf, pdf_filename, ExportConfig};
use quickresume::html::snapshot::standalone_page;
use quickresume::{html, render, Profile, ProfileStore, ThemeId};

#[derive(Parser)]
#[command(name = "quickresume")]
#[command(about = "Form-driven resume builder with themed rendering and export")]
struct Cli {
    /// Profile store directory
    #[arg(short, long, default_value = ".quickresume")]
    store: PathBuf,

    /// Read a profile JSON file instead of the store
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Use the built-in sample profile
    #[arg(long)]
    sample: bool,

    /// Override the profile's theme by name (unknown names fall back to the
    /// default theme)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write the standalone HTML snapshot to this path
    #[arg(long)]
    html: Option<PathBuf>,

    /// Write the paginated PDF to this path (a directory gets the derived
    /// filename)
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Export geometry file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available themes
    #[arg(long)]
    themes: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.themes {
        print_themes();
        return ExitCode::SUCCESS;
    }

    // Load export geometry
    let config = match &cli.config {
        Some(path) => match ExportConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading export config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ExportConfig::default(),
    };

    // Load the profile: explicit file, sample, or the store
    let mut profile = if cli.sample {
        Profile::sample()
    } else if let Some(path) = &cli.profile {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    eprintln!("Error parsing profile '{}': {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                eprintln!("Error reading profile '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        ProfileStore::open(&cli.store).load()
    };

    if let Some(name) = &cli.theme {
        profile.theme = ThemeId::resolve(name);
    }

    let tree = render(&profile);

    if let Some(path) = &cli.html {
        let page = standalone_page(&profile, &tree);
        if let Err(e) = fs::write(path, page) {
            eprintln!("Error writing HTML snapshot '{}': {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("wrote {}", path.display());
    }

    if let Some(path) = &cli.pdf {
        let path = if path.is_dir() {
            path.join(pdf_filename(&profile.full_name))
        } else {
            path.clone()
        };
        if let Err(e) = export_pdf(&tree, &config, &path) {
            eprintln!("Error: failed to generate PDF. Please try again. ({e})");
            return ExitCode::FAILURE;
        }
        println!("wrote {}", path.display());
    }

    // With no output target, print the realized markup
    if cli.html.is_none() && cli.pdf.is_none() {
        println!("{}", html::realize(&tree));
    }

    ExitCode::SUCCESS
}

fn print_themes() {
    println!("Available themes (default: {}):", ThemeId::default());
    for theme in ThemeId::ALL {
        println!("  {:<14} {:<14} {}", theme.as_str(), theme.display_name(), theme.blurb());
    }
}
