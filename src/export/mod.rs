pub mod pdf;

pub use pdf::{ExportError, export_file_name, export_note};
