/// Wire types shared with the backend API
use serde::{Deserialize, Serialize};

/// A tracked product as the backend returns it.
///
/// Timestamps are RFC 3339 strings; they are only displayed, never computed
/// with, so they stay as strings on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub url: String,
    pub platform: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for registering a new product. The backend detects the platform
/// itself, so only the user-entered fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub url: String,
}

/// Response to an on-demand scrape of one product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrapeOutcome {
    pub message: String,
    pub price: f64,
    /// Name of the product that was scraped.
    pub product: String,
}

/// Response to deleting a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteOutcome {
    pub message: String,
    pub id: String,
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Returns the listing with the product carrying `id` removed. Every other
/// entry is kept, in order. Unknown ids leave the listing unchanged.
pub fn without_product(list: &[Product], id: &str) -> Vec<Product> {
    list.iter()
        .filter(|product| product.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_backend_json() {
        let raw = r#"{
            "id": "3f2a1d9c",
            "name": "Wireless Mouse",
            "url": "https://www.amazon.in/dp/B0ABC123",
            "platform": "amazon",
            "created_at": "2025-01-15T10:30:00Z",
            "updated_at": "2025-01-16T08:00:00Z"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, "3f2a1d9c");
        assert_eq!(product.platform, "amazon");
        assert_eq!(product.created_at, "2025-01-15T10:30:00Z");
    }

    #[test]
    fn test_empty_listing_is_null() {
        // The backend serializes an empty product list as JSON null.
        let products: Option<Vec<Product>> = serde_json::from_str("null").unwrap();
        assert!(products.is_none());

        let products: Option<Vec<Product>> = serde_json::from_str("[]").unwrap();
        assert_eq!(products, Some(Vec::new()));
    }

    #[test]
    fn test_new_product_serializes_user_fields_only() {
        let new = NewProduct {
            name: "Wireless Mouse".to_string(),
            url: "https://www.amazon.in/dp/B0ABC123".to_string(),
        };

        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Wireless Mouse",
                "url": "https://www.amazon.in/dp/B0ABC123"
            })
        );
    }

    #[test]
    fn test_scrape_outcome_decodes() {
        let raw = r#"{"message": "Price scraped successfully", "price": 1299.0, "product": "Wireless Mouse"}"#;
        let outcome: ScrapeOutcome = serde_json::from_str(raw).unwrap();
        assert_eq!(outcome.price, 1299.0);
        assert_eq!(outcome.product, "Wireless Mouse");
    }

    fn sample(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://www.amazon.in/dp/{}", id),
            platform: "amazon".to_string(),
            created_at: "2025-01-15T10:30:00Z".to_string(),
            updated_at: "2025-01-16T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_without_product_removes_only_the_matching_card() {
        let list = vec![
            sample("a1", "Mouse"),
            sample("b2", "Keyboard"),
            sample("c3", "Monitor"),
        ];

        let remaining = without_product(&list, "b2");
        let ids: Vec<&str> = remaining.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "c3"]);
    }

    #[test]
    fn test_without_product_unknown_id_keeps_everything() {
        let list = vec![sample("a1", "Mouse"), sample("b2", "Keyboard")];
        assert_eq!(without_product(&list, "zz"), list);
        assert!(without_product(&[], "a1").is_empty());
    }

    #[test]
    fn test_error_body_decodes() {
        let raw = r#"{"error": "invalid URL format"}"#;
        let body: ErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.error, "invalid URL format");
    }
}
