//! Input parsing and tour output.

mod input;
mod output;

pub use input::{parse_instance, parse_instance_str, TspInstance};
pub use output::{format_tour, write_tour};
