mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use xterm_config::overrides::{apply_overrides, sync_home};
use xterm_config::{ConfigError, EnvSource, EnvironmentContext, MapEnv, Os, ProcessEnv, Resolver};

use cmd::{cmd_data_dir, cmd_get, cmd_info, cmd_show};
use output::{OutputFormat, print_error};

/// xterm-defaults - default settings for the atom-xterm terminal plugin
#[derive(Parser)]
#[command(name = "xterm-defaults")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(flatten)]
  env: EnvArgs,

  #[command(subcommand)]
  command: Commands,
}

/// Inputs that replace what would otherwise be read from the running host
#[derive(Args)]
struct EnvArgs {
  /// Resolve for another platform (win32, darwin, linux, unix)
  #[arg(long, global = true, value_name = "OS", value_parser = parse_platform)]
  platform: Option<Os>,

  /// Set an environment variable before resolving
  #[arg(long = "env", global = true, value_name = "KEY=VALUE")]
  set: Vec<String>,

  /// Remove an environment variable before resolving
  #[arg(long, global = true, value_name = "KEY")]
  unset: Vec<String>,

  /// Use this home directory instead of the detected one
  #[arg(long, global = true, value_name = "PATH")]
  home: Option<PathBuf>,
}

impl EnvArgs {
  fn is_live(&self) -> bool {
    self.set.is_empty() && self.unset.is_empty() && self.home.is_none()
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Show every setting with its default value
  Show {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Print the default for a single setting
  Get {
    /// Setting name, e.g. `fontSize` or `atom-xterm.spawnPtySettings.command`
    name: String,
  },

  /// Print the user data directory
  DataDir,

  /// Show detected platform information
  Info,
}

fn parse_platform(name: &str) -> Result<Os, ConfigError> {
  Ok(name.parse::<Os>()?)
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let os = cli.env.platform.unwrap_or_else(Os::current);

  if cli.env.is_live() {
    let resolver = Resolver::new(EnvironmentContext::new(os, ProcessEnv));
    return dispatch(cli.command, &resolver);
  }

  let mut env = apply_overrides(MapEnv::capture(), &cli.env.set, &cli.env.unset)?;
  match cli.env.home {
    Some(home) => env.set_home(home),
    None => sync_home(&mut env, os),
  }
  let resolver = Resolver::new(EnvironmentContext::new(os, env));
  dispatch(cli.command, &resolver)
}

fn dispatch<E: EnvSource>(command: Commands, resolver: &Resolver<E>) -> Result<()> {
  match command {
    Commands::Show { format } => cmd_show(resolver, format),
    Commands::Get { name } => cmd_get(resolver, &name),
    Commands::DataDir => {
      cmd_data_dir(resolver);
      Ok(())
    }
    Commands::Info => {
      cmd_info(resolver);
      Ok(())
    }
  }
}
