mod actions;
mod core;
#[cfg(test)]
mod tests;

pub use core::CardState;
