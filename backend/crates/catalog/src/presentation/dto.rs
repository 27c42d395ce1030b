//! API DTOs (Data Transfer Objects)

use kernel::id::ProductId;
use serde::{Deserialize, Serialize};

use crate::application::{CreateProductInput, UpdateProductInput};
use crate::domain::entities::Product;

/// Product as returned to clients; absent optional fields are omitted
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name.as_str().to_string(),
            description: p.description,
            price: p.price.value(),
            image_path: p.image_path,
            html_content: p.html_content,
        }
    }
}

/// Create request; missing fields are reported by validation, not by serde
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

impl From<CreateProductRequest> for CreateProductInput {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            image_path: r.image_path,
            html_content: r.html_content,
        }
    }
}

/// Partial update request; absent or null fields are left unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

impl From<UpdateProductRequest> for UpdateProductInput {
    fn from(r: UpdateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            image_path: r.image_path,
            html_content: r.html_content,
        }
    }
}
