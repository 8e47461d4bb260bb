//! Console output utilities.

use console::style;

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a generated name on its own line.
///
/// Names go to stdout unstyled so they can be piped.
pub fn print_name(name: &str) {
    println!("{}", name);
}
