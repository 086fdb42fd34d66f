//! Item catalog services and persistence.

pub mod clock;
pub mod context;
pub mod database;
pub mod domain;
pub mod fixtures;
pub mod uuids;

#[cfg(test)]
mod test;
