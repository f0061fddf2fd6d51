// How reports are printed
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Output formats that reports can be rendered in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Multi-line report meant for people.
    #[default]
    Human,

    /// One JSON object per bucket, one per line.
    Json,
}

impl From<bool> for OutputFormat {
    /// `true` selects `Json`, matching the `--json` flag.
    fn from(json: bool) -> Self {
        if json {
            Self::Json
        }
        else {
            Self::Human
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_format_from() {
        assert_eq!(OutputFormat::from(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from(false), OutputFormat::Human);
    }
}
