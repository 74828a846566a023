pub mod config;
pub mod note;
pub mod store;

pub use config::*;
pub use note::*;
pub use store::*;
