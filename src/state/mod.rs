//! Application state module

mod fields;
mod status;
mod store;

pub use fields::*;
pub use status::*;
pub use store::*;
