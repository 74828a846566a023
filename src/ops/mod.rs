pub mod note_ops;
pub mod search;
