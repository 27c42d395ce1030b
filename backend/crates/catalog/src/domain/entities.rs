//! Domain Entities
//!
//! Core business entities for the catalog domain.

use kernel::id::ProductId;

use crate::domain::value_objects::{Price, ProductName};

/// Product entity (a stored row)
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

/// Validated product awaiting an id from the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

impl NewProduct {
    /// Attach the store-assigned id
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_path: self.image_path,
            html_content: self.html_content,
        }
    }
}

/// Partial update
///
/// `None` leaves a field alone. For optional text fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub description: Option<Option<String>>,
    pub price: Option<Price>,
    pub image_path: Option<Option<String>>,
    pub html_content: Option<Option<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge onto an existing product
    pub fn apply(self, mut product: Product) -> Product {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image_path) = self.image_path {
            product.image_path = image_path;
        }
        if let Some(html_content) = self.html_content {
            product.html_content = html_content;
        }
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        NewProduct {
            name: ProductName::new("Oil filter").unwrap(),
            description: Some("Fits most sedans".into()),
            price: Price::new(12.5).unwrap(),
            image_path: Some("/img/filter.png".into()),
            html_content: None,
        }
        .with_id(ProductId::from_i64(1))
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let patch = ProductPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(sample()), sample());
    }

    #[test]
    fn test_price_only_patch_keeps_other_fields() {
        let patch = ProductPatch {
            price: Some(Price::new(39.99).unwrap()),
            ..Default::default()
        };
        let updated = patch.apply(sample());

        assert_eq!(updated.price.value(), 39.99);
        assert_eq!(updated.name, sample().name);
        assert_eq!(updated.description, sample().description);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let patch = ProductPatch {
            description: Some(None),
            price: Some(Price::ZERO),
            ..Default::default()
        };
        let updated = patch.apply(sample());

        assert_eq!(updated.description, None);
        assert_eq!(updated.price, Price::ZERO);
        assert_eq!(updated.image_path, sample().image_path);
    }
}
