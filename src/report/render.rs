// Rendering an Analysis as JSON or human readable text
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use crate::common::{
    HumanSize,
    OutputFormat,
};
use std::fmt;
use super::analysis::{
    rfc3339,
    Analysis,
};

/// Render `analysis` in the requested `format`.
///
/// JSON output is a single line. Human readable output spans several lines
/// and ends with a newline.
pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(analysis.to_string()),
        OutputFormat::Json  => {
            serde_json::to_string(analysis)
                .with_context(|| format!("serializing report for '{}'", analysis.name))
        },
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ObjectCount: {}", self.total_count)?;
        writeln!(f, "TotalSize: {}", self.total_size.humansize())?;
        writeln!(f, "CreationDate: {}", rfc3339(&self.creation_date))?;
        writeln!(f, "LastModified: {}", rfc3339(&self.last_modified))?;

        if let Some(error) = &self.error {
            writeln!(f, "Error: {}", error)?;
        }

        writeln!(f, "Objects:")?;
        for object in &self.objects {
            writeln!(f, " * {}", object)?;
        }

        let total = self.total_size.humansize();

        writeln!(f, "TotalSizePerAccount:")?;
        for (owner, size) in &self.size_per_owner_id {
            writeln!(f, " * {}/{} {}", size.humansize(), total, owner)?;
        }

        Ok(())
    }
}
