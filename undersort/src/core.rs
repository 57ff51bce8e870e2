// src/core.rs
pub mod collector;
pub mod exclude;
pub mod sorter;

#[cfg(test)]
pub mod test_utils;
