use std::io::{self, Write};

use nbp_rates_core::RateSummary;

use crate::error::CliError;

/// Writes the ask mean and bid standard deviation, one per line.
pub fn render(summary: &RateSummary) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, summary)?;
    handle.flush()?;
    Ok(())
}

/// Reports a failure on stderr with its message alone.
pub fn render_error(error: &CliError) {
    let stderr = io::stderr();
    // nowhere left to report a failed write
    write_error(&mut stderr.lock(), error).ok();
}

fn write_summary(writer: &mut impl Write, summary: &RateSummary) -> io::Result<()> {
    writeln!(writer, "{summary}")
}

fn write_error(writer: &mut impl Write, error: &CliError) -> io::Result<()> {
    writeln!(writer, "{error}")
}
