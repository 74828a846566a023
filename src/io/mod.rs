pub mod autosave;
pub mod config_io;
pub mod store_io;
