//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Product, NewProduct, ProductPatch)
//! - Domain value objects (ProductName, Price)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
