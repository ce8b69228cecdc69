use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    ArgAction, Args, Parser, ValueHint,
};
use log::Level;
use std::path::PathBuf;

/// Logging options.
#[derive(Args, Clone, Debug)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Warn,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

/// Where the input comes from. Exactly one is required.
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct InputOpt {
    /// Input text to process.
    #[arg(short, long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Input file to process.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

/// Direction of the conversion. Exactly one is required.
#[derive(Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct OperationOpt {
    /// Convert text to binary.
    #[arg(short, long)]
    pub encode: bool,

    /// Convert binary to text.
    #[arg(short, long)]
    pub decode: bool,
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "mcp-binary",
    version,
    disable_version_flag = true,
    about = include_str!("about.md"),
    long_about = concat!(
        include_str!("about.md"),
        "\n\n",
        include_str!("../../../UsageInstructions.md")
    ),
)]
pub struct ConverterCli {
    #[command(flatten)]
    pub input: InputOpt,

    #[command(flatten)]
    pub operation: OperationOpt,

    /// Output file path. If not provided prints to standard output.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: (),

    #[command(flatten)]
    pub log_opt: LoggingOpt,
}
