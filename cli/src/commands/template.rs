//! Command: write an example configuration.
use anyhow::Result;

use crate::cli::TemplateOpts;
use crate::config::template;
use crate::logging::Log;

/// Run the template command.
///
/// # Errors
///
/// Returns an error if the template file cannot be written.
pub fn run(opts: &TemplateOpts, log: &dyn Log) -> Result<()> {
    template::write_template(&opts.output)?;
    log.info(&format!("YAML template written to {}", opts.output.display()));
    Ok(())
}
