use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rxl",
    about = "RxLedger — drug custody ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./rxl.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Start from an empty ledger instead of the genesis drug set
    #[arg(long, global = true)]
    pub no_genesis: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all drugs in key order
    List,
    /// Show one drug by id
    Get(GetArgs),
    /// Record a new drug
    Add(AddArgs),
    /// Transfer a drug to a new holder
    Transfer(TransferArgs),
    /// Run request paths in order against one ledger
    Exec(ExecArgs),
    /// Run request paths read from a file, one per line
    Replay(ReplayArgs),
    /// Print the genesis drug set
    Genesis,
}

#[derive(Args)]
pub struct GetArgs {
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Positional encoding `id-long, lat-timestamp-holder-manufacturer`
    #[arg(conflicts_with_all = ["id", "longitude", "latitude", "timestamp", "holder", "manufacturer"])]
    pub encoded: Option<String>,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,
    #[arg(long)]
    pub timestamp: Option<String>,
    #[arg(long)]
    pub holder: Option<String>,
    #[arg(long)]
    pub manufacturer: Option<String>,
}

#[derive(Args)]
pub struct TransferArgs {
    /// Positional encoding `id-newHolder`
    #[arg(conflicts_with_all = ["id", "holder"])]
    pub encoded: Option<String>,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub holder: Option<String>,
}

#[derive(Args)]
pub struct ExecArgs {
    #[arg(required = true)]
    pub paths: Vec<String>,
}

#[derive(Args)]
pub struct ReplayArgs {
    pub file: PathBuf,
}
