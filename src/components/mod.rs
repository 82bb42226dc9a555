pub mod header;

pub use header::{tab_body_style, tab_header, title_banner};
