pub mod args;
pub mod confirm;
pub mod op;
pub mod ops;

pub use ops::{Category, Generate, Init, Search, Site};
