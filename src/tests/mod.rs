// Shared helpers for the scenario tests below
pub mod common;
