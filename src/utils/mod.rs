//! Shared helpers for alphabets and modular index arithmetic.

pub mod alphabet;
pub mod modular;
