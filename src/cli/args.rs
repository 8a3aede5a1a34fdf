//! Clap-derived argument types for the `alumnet` binary.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Alumnet - Student/alumni mentorship web application
#[derive(Parser, Debug)]
#[command(name = "alumnet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),

    /// Manage the database schema
    Migrate(MigrateArgs),
}

/// Options for `serve`
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to serve on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "SERVER_PORT")]
    pub port: u16,
}

/// Options for `migrate`
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Schema management actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Undo the most recent migration
    Down,
    /// List applied and pending migrations
    Status,
    /// Drop everything and reapply from scratch
    Fresh,
}
