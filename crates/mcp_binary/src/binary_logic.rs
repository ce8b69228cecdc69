use crate::{
    args::{ConverterCli, LoggingOpt},
    config::Config,
    processor::Processor,
};
use anyhow::Context;
use log::debug;
use std::io::{self, Write};

/// Install the logger at the requested level.
pub fn init_logging(opt: &LoggingOpt) -> anyhow::Result<()> {
    simple_logger::init_with_level(opt.log_level).context("Initializing logger")
}

pub fn run(opt: ConverterCli) -> anyhow::Result<()> {
    // Init logging.
    init_logging(&opt.log_opt)?;

    let config = Config::try_from(opt)?;
    let stdout = io::stdout();
    convert(&config, &mut stdout.lock())
}

/// Performs the conversion in `config`.
/// The result goes to the output file if there is one, otherwise to `out` followed by a newline.
pub fn convert(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let processor = Processor::new();
    debug!("mcp-binary {} running {config:?}", processor.version());

    let result = processor.process(config)?;

    match &config.output {
        Some(path) => {
            let message = processor.save_output(&result, path)?;
            writeln!(out, "{message}").context("Writing confirmation to stdout")?;
        }
        None => writeln!(out, "{result}").context("Writing result to stdout")?,
    }
    Ok(())
}
