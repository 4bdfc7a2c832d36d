//! CLI command definitions using Clap.

use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::config::{self, DockdConfig};
use crate::core::constants::{APP_NAME, APP_VERSION};
use crate::core::events::LogEvents;
use crate::core::{Error, Result};
use crate::dock::DockedAppManager;
use crate::services::open_dock_manager;

/// dockd CLI - manage the applications docked to the launcher strip.
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// List docked applications in display order.
    List {
        /// Print the list as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Print whether an application is docked.
    #[command(name = "is-docked")]
    IsDocked {
        /// Application id (desktop entry key).
        id: String,
    },

    /// Dock an application.
    ///
    /// Installed applications only need their id. Applications without a
    /// desktop entry also need --exec, and a scratch entry is created for them.
    #[command(after_long_help = r#"Examples:
  dockd dock firefox
  dockd dock my-tool --title "My Tool" --icon ~/icons/tool.png --exec ~/bin/tool"#)]
    Dock {
        /// Application id (desktop entry key).
        id: String,

        /// Display name for applications without a desktop entry.
        #[arg(long, default_value = "")]
        title: String,

        /// Icon for applications without a desktop entry.
        #[arg(long, default_value = "")]
        icon: String,

        /// Command line for applications without a desktop entry.
        #[arg(long, default_value = "")]
        exec: String,
    },

    /// Undock an application.
    Undock {
        /// Application id (desktop entry key).
        id: String,
    },

    /// Output the configuration JSON Schema.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(dockd completions --shell zsh)"
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

fn open_manager(config: &DockdConfig) -> Result<DockedAppManager> {
    open_dock_manager(config, Arc::new(LogEvents)).map_err(|err| Error::other(err.to_string()))
}

/// Parses the command line and executes the command.
///
/// # Errors
///
/// Returns an error when the configuration is unusable or a dock/undock
/// request is rejected.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli.command)
}

/// Executes a parsed command.
///
/// # Errors
///
/// See [`run`].
pub fn execute(command: &Commands) -> Result<()> {
    match command {
        Commands::Schema => {
            println!("{}", config::schema::generate_schema_json());
            return Ok(());
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, APP_NAME, &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let config = config::load_config_or_default()?;
    let manager = open_manager(&config)?;

    run_and_close(&manager, command)
}

/// Runs `command` against `manager`, then tears the manager down.
fn run_and_close(manager: &DockedAppManager, command: &Commands) -> Result<()> {
    let result = run_on(manager, command);
    manager.destroy();
    result
}

fn run_on(manager: &DockedAppManager, command: &Commands) -> Result<()> {
    match command {
        Commands::List { json } => {
            let apps = manager.docked_app_list();
            if *json {
                println!("{}", serde_json::to_string_pretty(&apps)?);
            } else {
                for id in apps {
                    println!("{id}");
                }
            }
        }
        Commands::IsDocked { id } => println!("{}", manager.is_docked(id)),
        Commands::Dock { id, title, icon, exec } => {
            if !manager.request_dock(id, title, icon, exec) {
                return Err(Error::other(format!("cannot dock '{id}'")));
            }
        }
        Commands::Undock { id } => {
            if !manager.request_undock(id) {
                return Err(Error::other(format!("'{id}' is not docked")));
            }
        }
        Commands::Schema | Commands::Completions { .. } => {}
    }
    Ok(())
}
