// src/core/mod.rs

pub mod cell;
pub mod normalize;

pub use cell::Cell;
pub use normalize::Amount;
