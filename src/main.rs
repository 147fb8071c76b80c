mod extension;
mod protocol;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extension::Extension;
use hosts::{HostCatalog, HostSources};
use query::resolve;
use terminal::Launch;
use tracing::{info, warn};

const VERSION: &str = concat!(env!("SSHLAUNCH_VERSION"), " ", env!("SSHLAUNCH_BUILD_HASH"));

#[derive(Parser)]
#[command(name = "sshlaunch", version = VERSION, about)]
struct Arguments {
    /// Directory holding `config` and `known_hosts` [default: ~/.ssh]
    #[arg(long, global = true, value_name = "DIR")]
    ssh_dir: Option<PathBuf>,

    /// Preferences file [default: ~/.sshlaunch.json]
    #[arg(long, global = true, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every discovered host
    Hosts,
    /// Show the results for launcher input such as `root@web`
    Query {
        input: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a terminal connected to TARGET
    Connect { target: String },
    /// Write the default preferences file if it does not exist
    Init,
    /// Answer host-application events read as JSON lines from stdin
    Serve,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    init_logging(args.verbose);

    let sources = match args.ssh_dir {
        Some(dir) => HostSources::in_dir(&dir),
        None => HostSources::from_home().context("could not determine home directory")?,
    };
    let prefs_path = match args.prefs {
        Some(path) => path,
        None => settings::preferences_path().context("could not determine home directory")?,
    };

    match args.command {
        Command::Hosts => {
            for host in HostCatalog::load(&sources).iter() {
                println!("{host}");
            }
        }
        Command::Query { input, json } => {
            let items = resolve(input.as_deref(), &HostCatalog::load(&sources));
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    println!("{}\t{}", item.payload().unwrap_or_default(), item.description);
                }
            }
        }
        Command::Connect { target } => {
            let preferences = settings::load_from_path(&prefs_path)?;
            let extension = Extension::new(sources, preferences);
            match terminal::launch(&target, &extension.launch_spec())? {
                Launch::Spawned(pid) => info!(pid, "connected to {target}"),
                Launch::Disabled => warn!("no terminal configured in {}", prefs_path.display()),
            }
        }
        Command::Init => {
            settings::ensure_preferences_exist(&prefs_path)?;
            println!("{}", prefs_path.display());
        }
        Command::Serve => {
            let preferences = settings::load_from_path(&prefs_path)?;
            let mut extension = Extension::new(sources, preferences);
            extension.serve(io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Logs to stderr so `serve` output on stdout stays machine readable.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_filter = if verbose {
        "debug"
    } else {
        "warn,sshlaunch=info,terminal=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
