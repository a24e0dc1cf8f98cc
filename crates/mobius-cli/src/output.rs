//! Structured output helpers for the CLI.

use serde::Serialize;

use crate::OutputFormat;

/// Print a serializable result in the requested format.
///
/// JSON output goes to stdout even in quiet mode so the command stays
/// scriptable; text output is handled by the caller.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, _quiet: bool) {
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize output: {e}"),
        }
    }
}
