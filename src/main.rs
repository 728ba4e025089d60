use clap::{ArgAction, Parser, Subcommand};
use sitedown::{build, config, output, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitedown")]
#[command(about = "Static site generator for a tree of Markdown files")]
#[command(long_about = "\
Static site generator for a tree of Markdown files

Every .md file under the site root becomes a standalone HTML page at the same
relative path, and index.md becomes the home page with a generated table of
contents in place of its <!-- TABLE_OF_CONTENTS --> marker.

Site structure:

  ./
  ├── site.toml              # Optional config (see gen-config)
  ├── index.md               # Home page template (required)
  ├── guide.md               # → _site/guide.html
  ├── notes/
  │   └── tips.md            # → _site/notes/tips.html (indented in the index)
  └── .drafts/               # Hidden: never published

Title resolution (first available wins):
  front matter `title:` → first `# heading` → first `## heading` → file name

Every build deletes and recreates the output directory.")]
#[command(version)]
struct Cli {
    /// Site root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the whole site (the default)
    Build,
    /// List pages and their resolved titles without rendering
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            let paths = config::SitePaths::resolve(&cli.root, &config)?;
            let renderer = render::renderer_for(&config.renderer)?;
            println!("==> Building {}", paths.root.display());
            let report = build::build(&paths, &config, renderer.as_ref())?;
            output::print_build_output(&report);
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            let paths = config::SitePaths::resolve(&cli.root, &config)?;
            println!("==> Checking {}", paths.root.display());
            let pages = build::check(&paths, &config)?;
            output::print_check_output(&pages);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "sitedown=warn",
        1 => "sitedown=info",
        2 => "sitedown=debug",
        _ => "sitedown=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
