use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Candidate viability metrics from zone-level vote tallies
#[derive(Parser, Debug)]
#[command(name = "viability", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every (zone, candidate) row as viable, associate and intermediate
    Classify(ClassifyArgs),

    /// Summarize elected, unelected viable and intermediate candidates
    Summarize(SummarizeArgs),

    /// Write per-party or per-zone concentration statistics
    Groups(GroupsArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Raw results CSV, one row per candidate per zone
    #[arg(value_hint = ValueHint::FilePath)]
    pub results: PathBuf,

    /// Field separator of the results CSV
    #[arg(long, default_value_t = ',')]
    pub separator: char,

    /// Rename a source column to a result column, e.g. QT_VOTOS=votes (repeatable)
    #[arg(long = "rename", value_name = "SOURCE=COLUMN")]
    pub renames: Vec<String>,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output file; stdout when omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum TableFormat { Csv, Json }

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum SummaryFormat { Text, Csv, Json }

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum GroupBy { Party, Zone }

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
    pub format: TableFormat,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,

    /// JSON election config, e.g. {"elected_codes": [2, 3]}
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "elected_codes")]
    pub config: Option<PathBuf>,

    /// Situation code that marks a candidate elected (repeatable)
    #[arg(long = "elected-code", value_name = "CODE")]
    pub elected_codes: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct GroupsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
    pub format: TableFormat,

    /// Grouping to report
    #[arg(long, value_enum)]
    pub by: GroupBy,
}
