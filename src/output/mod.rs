pub mod formatter;

pub use formatter::{format_verdict, render_report, should_use_colors};
