pub mod inline;

pub use inline::*;
