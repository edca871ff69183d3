use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "transidx",
    version,
    about = "Transparency index updater for monthly agency disclosure records"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recompute and persist scores for a selection of records
    Update(UpdateCommand),
}

#[derive(Args)]
pub struct UpdateCommand {
    /// Agency identifier to select records for
    #[arg(
        long,
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub agency: Option<String>,

    /// Year of the records to update (used with --agency)
    #[arg(long, default_value_t = 2021)]
    pub year: i64,

    /// Process every record in the store
    #[arg(long, required_unless_present = "agency")]
    pub all: bool,

    /// Compute and print scores without writing them back
    #[arg(long)]
    pub dry_run: bool,
}
