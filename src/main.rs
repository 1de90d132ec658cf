mod commands;
mod core;
mod manifest;
mod product;

use clap::{Parser, Subcommand};
use core::error::{RelmanError, print_error};
use std::path::PathBuf;

/// Build and validate release manifests for coordinated multi-repository releases
#[derive(Parser)]
#[command(name = "relman")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct RelmanCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the release manifest, validate it, and write JSON to stdout
  CreateRelease {
    /// Product definition file (TOML); defaults to the built-in Kubeform definition
    #[arg(long)]
    definition: Option<PathBuf>,
    /// Override the release version from the product definition
    #[arg(long)]
    release: Option<String>,
    /// Prerelease suffix applied to the release and every cycle-derived tag (e.g. "-rc.1")
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    prerelease: String,
    /// Write the manifest to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
  },

  /// Validate an existing release manifest file
  Validate {
    /// Path to a JSON release manifest
    file: PathBuf,
    /// Output violations in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = RelmanCli::parse();

  let result = match cli.command {
    Commands::CreateRelease {
      definition,
      release,
      prerelease,
      output,
    } => commands::run_create_release(definition, release, prerelease, output),
    Commands::Validate { file, json } => commands::run_validate(file, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelmanError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
