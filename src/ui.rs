//! Formatting functions for terminal output.
//!
//! All display logic lives here, separated from version resolution. The
//! library surface itself never prints; only the binary goes through these.

use crate::boundary::BoundaryWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}
