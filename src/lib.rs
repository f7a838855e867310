pub mod config;
pub mod driver;
pub mod error;
pub mod list;
pub mod output;
pub mod parser;
pub mod printer;
pub mod sorter;

pub use config::Config;
pub use error::{ParseError, UsageError};
pub use list::IntegerList;
pub use parser::parse_list;
pub use printer::{format_list, write_list, OutputFormat};
pub use sorter::{bubble_sort, SortStats};
