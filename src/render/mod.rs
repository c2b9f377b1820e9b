pub mod ansi;
pub mod bars;
pub mod markup;
pub mod report;

pub use ansi::{encode_ansi, label_text, preview_cols, report_lines};
pub use bars::{divide, progress_bar, target_range_bar};
pub use markup::{Markup, escape};
pub use report::render_report;
