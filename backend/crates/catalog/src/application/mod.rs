//! Application Layer - Use cases
//!
//! One use case per product operation. Each validates its input into
//! domain types before touching the repository.

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

pub use create_product::{CreateProductInput, CreateProductUseCase};
pub use delete_product::DeleteProductUseCase;
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};
