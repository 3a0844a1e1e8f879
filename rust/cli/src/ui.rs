//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Explain why the table could not be set up.
pub fn write_termination_reason(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err)?;
    writeln!(err, "This program requires two integers greater than zero.")?;
    writeln!(err, "The first integer is the number of cards per hand.")?;
    writeln!(err, "In Stud Poker there are always 5 cards per hand.")?;
    writeln!(err, "The second integer is the number of hands.")?;
    writeln!(err, "The number of hands has to be 1 through 10 inclusive.")?;
    writeln!(err)
}
