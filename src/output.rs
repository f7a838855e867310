use crate::sorter::SortStats;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const USAGE: &str =
    "Usage: please provide a list of at least two integers to sort in the format \"1, 2, 3, 4, 5\"";

/// Print the usage message (red when colored)
pub fn usage<W: Write>(err: &mut W, color: bool) -> io::Result<()> {
    if color {
        writeln!(err, "{}", USAGE.red())
    } else {
        writeln!(err, "{}", USAGE)
    }
}

/// Print why the input was rejected (yellow)
pub fn reason<W: Write>(err: &mut W, color: bool, message: &str) -> io::Result<()> {
    if color {
        writeln!(err, "{} {}", "error:".yellow().bold(), message.yellow())
    } else {
        writeln!(err, "error: {}", message)
    }
}

/// Print sort counters (dimmed)
pub fn sort_stats<W: Write>(err: &mut W, color: bool, len: usize, stats: &SortStats) -> io::Result<()> {
    let line = format!(
        "sorted {} values: {} passes, {} comparisons, {} swaps",
        len, stats.passes, stats.comparisons, stats.swaps
    );
    if color {
        writeln!(err, "{}", line.dimmed())
    } else {
        writeln!(err, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_usage_is_exact() {
        let text = captured(|w| usage(w, false));
        assert_eq!(text, format!("{}\n", USAGE));
    }

    #[test]
    fn test_colored_usage_wraps_message() {
        let text = captured(|w| usage(w, true));
        assert!(text.contains(USAGE));
        assert!(text.starts_with("\x1b["));
    }

    #[test]
    fn test_sort_stats_line() {
        let stats = SortStats {
            passes: 2,
            comparisons: 3,
            swaps: 1,
        };
        let text = captured(|w| sort_stats(w, false, 3, &stats));
        assert_eq!(text, "sorted 3 values: 2 passes, 3 comparisons, 1 swaps\n");
    }

    #[test]
    fn test_reason_line() {
        let text = captured(|w| reason(w, false, "input is empty"));
        assert_eq!(text, "error: input is empty\n");
    }
}
