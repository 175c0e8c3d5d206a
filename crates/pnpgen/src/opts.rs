use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{PcbSideArg, PickPlaceItemKindArg};

#[derive(Parser, Debug)]
#[command(name = "pnpgen")]
#[command(bin_name = "pnpgen")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log", require_equals = true)]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
pub(crate) enum Command {
    /// Generate the pick-and-place items of a board
    Generate {
        /// Board snapshot file (JSON)
        #[arg(long, value_name = "FILE")]
        board: PathBuf,

        /// Locale order, overrides the locale order of the project (e.g. 'de_CH,de_DE')
        #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "LOCALE")]
        locale: Vec<String>,

        /// Only show items on this side
        #[arg(long)]
        side: Option<PcbSideArg>,

        /// Only show items of this kind
        #[arg(long)]
        kind: Option<PickPlaceItemKindArg>,
    },
}
