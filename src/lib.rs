pub mod cli;
pub mod export;
pub mod io;
pub mod markup;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
