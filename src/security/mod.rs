//! Request guards.

pub mod rate_limit;
