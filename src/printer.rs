use crate::list::IntegerList;
use std::io::{self, Write};

const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `1, 2, 3`
    #[default]
    Plain,
    /// `[1,2,3]`
    Json,
}

impl OutputFormat {
    /// Case-insensitive lookup, `None` for anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "plain" | "text" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Join values with `", "`, no trailing separator.
pub fn format_list(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Write one line for `list` in the requested format.
pub fn write_list<W: Write>(out: &mut W, list: &IntegerList, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", format_list(list)),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, list)?;
            writeln!(out)
        }
    }
}
