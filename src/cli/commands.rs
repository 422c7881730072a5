use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fh", about = concat!("Focus Helper v", env!("CARGO_PKG_VERSION"), " - tasks, notes and a focus timer in floating windows"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding saved tasks and notes
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the panel directly, skipping the landing page
    App,
    /// Print saved tasks
    Tasks(TasksArgs),
    /// Print saved notes verbatim
    Notes,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Output as JSON (the stored array)
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fh", "tasks", "--json", "--data-dir", "/tmp/fh"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/fh")));
        match cli.command {
            Some(Commands::Tasks(args)) => assert!(args.json),
            _ => panic!("expected tasks subcommand"),
        }
    }

    #[test]
    fn no_subcommand_is_landing() {
        let cli = Cli::try_parse_from(["fh", "--ephemeral"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.ephemeral);
    }
}
