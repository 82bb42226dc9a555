pub mod pipeline_panel;
pub mod status_line;

pub use pipeline_panel::pipeline_panel;
pub use status_line::status_line;
