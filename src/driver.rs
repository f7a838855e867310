use crate::config::Config;
use crate::error::UsageError;
use crate::list::IntegerList;
use crate::output;
use crate::parser::parse_list;
use crate::printer::write_list;
use crate::sorter::bubble_sort;
use std::io::Write;

pub const EXIT_OK: i32 = 0;
pub const EXIT_USAGE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the usage message and exit with `EXIT_USAGE`.
    Usage(UsageError),
    /// Sort and print this list, exit with `EXIT_OK`.
    Run(IntegerList),
}

/// Decide what to do with the arguments (program name already stripped).
pub fn plan<S: AsRef<str>>(args: &[S]) -> Outcome {
    let input = match args {
        [input] => input.as_ref(),
        _ => return Outcome::Usage(UsageError::ArgumentCount { found: args.len() }),
    };

    match parse_list(input) {
        Ok(list) => Outcome::Run(list),
        Err(e) => Outcome::Usage(e.into()),
    }
}

/// Run the sorter end to end and return the process exit code.
pub fn run<S, O, E>(args: &[S], config: &Config, out: &mut O, err: &mut E) -> i32
where
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    match plan(args) {
        Outcome::Usage(reason) => {
            if config.verbose {
                let _ = output::reason(err, config.color, &reason.to_string());
            }
            let _ = output::usage(err, config.color);
            EXIT_USAGE
        }
        Outcome::Run(mut list) => {
            let stats = bubble_sort(&mut list);

            if let Err(e) = write_list(out, &list, config.format).and_then(|_| out.flush()) {
                let _ = output::reason(err, config.color, &format!("failed to write output: {}", e));
                return EXIT_USAGE;
            }

            if config.verbose {
                let _ = output::sort_stats(err, config.color, list.len(), &stats);
            }
            EXIT_OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_plan_without_arguments() {
        let args: [&str; 0] = [];
        assert_eq!(
            plan(&args),
            Outcome::Usage(UsageError::ArgumentCount { found: 0 })
        );
    }

    #[test]
    fn test_plan_with_extra_arguments() {
        assert_eq!(
            plan(&["1,2", "3,4"]),
            Outcome::Usage(UsageError::ArgumentCount { found: 2 })
        );
    }

    #[test]
    fn test_plan_with_bad_list() {
        assert_eq!(
            plan(&["3"]),
            Outcome::Usage(UsageError::Parse(ParseError::MissingDelimiter))
        );
    }

    #[test]
    fn test_plan_with_valid_list() {
        assert_eq!(
            plan(&["2,1"]),
            Outcome::Run(IntegerList::from(vec![2, 1]))
        );
    }
}
