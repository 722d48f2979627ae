//! Tour output: city indices separated by single spaces, newline-terminated.

use std::io::{self, Write};

use crate::tsp::Tour;

/// Formats a tour as one output line, including the trailing newline.
pub fn format_tour(tour: &Tour) -> String {
    format!("{tour}\n")
}

/// Writes a tour as one line.
pub fn write_tour<W: Write>(writer: &mut W, tour: &Tour) -> io::Result<()> {
    writeln!(writer, "{tour}")
}
