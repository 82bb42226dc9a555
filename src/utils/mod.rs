pub mod formatting;

pub use formatting::{command_line, selection_label};
