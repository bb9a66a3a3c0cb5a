//! File-to-file markdown conversion.

use std::fs;
use std::path::Path;

use crate::error::CliError;

/// Convert a markdown file to an HTML file.
///
/// The input must exist; the output is overwritten if present. Conversion is
/// all-or-nothing: a failed write may leave a partial output file behind.
pub(crate) fn convert_file(input: &Path, output: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::MissingInput(input.to_path_buf()));
    }

    let markdown = fs::read_to_string(input)?;
    let html = mdh_renderer::to_html(&markdown);
    fs::write(output, &html)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bytes = html.len(),
        "Converted markdown to HTML"
    );
    Ok(())
}
