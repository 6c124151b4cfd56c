//! Entity <-> model conversions

mod claim;
mod code;
mod user;

pub use code::CodeRow;
