//! Form domain layer
//!
//! Validation rules and the controller that turns user input and submits
//! into store mutations and persistence calls.

mod controller;
mod validation;

pub use controller::FormController;
