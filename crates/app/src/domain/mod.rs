//! Stockroom Domain Concerns

pub mod items;
