//! Domain Entities

pub mod identity;
pub mod user;
