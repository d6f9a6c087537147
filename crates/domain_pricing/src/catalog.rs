//! Policy catalog
//!
//! Loads per-product [`PolicyTerms`] from JSON product files and caches
//! them by product code. Misconfigured products are rejected at load time,
//! so a quotable product is always internally consistent.
//!
//! # Product file format
//!
//! ```json
//! {
//!     "products": [
//!         {
//!             "product_code": "TAKAFUL_TERM",
//!             "product_name": "Term Takaful Plan",
//!             "min_age": 18,
//!             "max_age": 65,
//!             "coverage_range": { "min": "100000", "max": "5000000" },
//!             "duration_options": [10, 20, 30],
//!             "base_premium_rate": "0.00008",
//!             "currency": "USD",
//!             "coverage_unit": "lakh"
//!         }
//!     ]
//! }
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::error::TermsError;
use crate::terms::PolicyTerms;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product file could not be read
    #[error("Product file not found: {0}")]
    FileNotFound(String),

    /// Product file is not valid JSON or missing fields
    #[error("Failed to parse product file: {0}")]
    Parse(String),

    /// A product definition failed terms validation
    #[error("Product {product_code} is misconfigured: {source}")]
    Misconfigured {
        product_code: String,
        source: TermsError,
    },

    /// Two products share a product code
    #[error("Duplicate product code: {0}")]
    DuplicateProduct(String),
}

/// On-disk shape of a product file
#[derive(Debug, Deserialize)]
struct ProductFile {
    products: Vec<PolicyTerms>,
}

/// In-memory catalog of quotable products, keyed by product code
///
/// Terms are shared behind `Arc` so concurrent quote handlers can hold a
/// product without cloning its definition.
#[derive(Debug, Default)]
pub struct PolicyCatalog {
    products: HashMap<String, Arc<PolicyTerms>>,
}

impl PolicyCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON product file string
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON, a misconfigured product,
    /// or a duplicated product code.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: ProductFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut catalog = Self::new();
        for terms in file.products {
            catalog.register(terms)?;
        }
        Ok(catalog)
    }

    /// Builds a catalog from a JSON product file on disk
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| CatalogError::FileNotFound(path.display().to_string()))?;
        Self::from_json(&content)
    }

    /// Registers one product, validating its terms first
    ///
    /// # Errors
    ///
    /// Rejects misconfigured terms and duplicate product codes.
    pub fn register(&mut self, terms: PolicyTerms) -> Result<(), CatalogError> {
        terms.validate().map_err(|source| CatalogError::Misconfigured {
            product_code: terms.product_code.clone(),
            source,
        })?;

        if self.products.contains_key(&terms.product_code) {
            return Err(CatalogError::DuplicateProduct(terms.product_code));
        }

        tracing::debug!(product_code = %terms.product_code, "Registered product");
        self.products
            .insert(terms.product_code.clone(), Arc::new(terms));
        Ok(())
    }

    /// Looks up a product by code
    pub fn get(&self, product_code: &str) -> Option<Arc<PolicyTerms>> {
        self.products.get(product_code).cloned()
    }

    /// Returns all products, sorted by product code
    pub fn list(&self) -> Vec<Arc<PolicyTerms>> {
        let mut products: Vec<_> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.product_code.cmp(&b.product_code));
        products
    }

    /// Returns the number of registered products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no products are registered
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::{CoverageRange, CoverageUnit};
    use core_kernel::{Currency, Rate};
    use rust_decimal_macros::dec;

    fn sample_product_json() -> &'static str {
        r#"{
            "products": [
                {
                    "product_code": "TAKAFUL_TERM",
                    "product_name": "Term Takaful Plan",
                    "min_age": 18,
                    "max_age": 65,
                    "coverage_range": { "min": "100000", "max": "5000000" },
                    "duration_options": [10, 20, 30],
                    "base_premium_rate": "0.00008",
                    "currency": "USD",
                    "coverage_unit": "lakh"
                },
                {
                    "product_code": "TAKAFUL_WHOLE",
                    "product_name": "Whole Life Takaful Plan",
                    "min_age": 18,
                    "max_age": 70,
                    "coverage_range": { "min": "200000" },
                    "duration_options": [20, 30],
                    "base_premium_rate": "0.00012",
                    "currency": "USD",
                    "coverage_unit": "lakh"
                }
            ]
        }"#
    }

    #[test]
    fn test_load_products_from_json() {
        let catalog = PolicyCatalog::from_json(sample_product_json()).unwrap();
        assert_eq!(catalog.len(), 2);

        let term = catalog.get("TAKAFUL_TERM").unwrap();
        assert_eq!(term.min_age, 18);
        assert_eq!(term.duration_options, vec![10, 20, 30]);
        assert_eq!(term.base_premium_rate, Rate::new(dec!(0.00008)));

        let whole = catalog.get("TAKAFUL_WHOLE").unwrap();
        assert_eq!(whole.coverage_range.max, None);
    }

    #[test]
    fn test_unknown_product_is_none() {
        let catalog = PolicyCatalog::from_json(sample_product_json()).unwrap();
        assert!(catalog.get("NO_SUCH_PLAN").is_none());
    }

    #[test]
    fn test_list_is_sorted_by_code() {
        let catalog = PolicyCatalog::from_json(sample_product_json()).unwrap();
        let codes: Vec<_> = catalog
            .list()
            .iter()
            .map(|t| t.product_code.clone())
            .collect();
        assert_eq!(codes, vec!["TAKAFUL_TERM", "TAKAFUL_WHOLE"]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            PolicyCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_misconfigured_product_rejected_at_load() {
        let json = r#"{
            "products": [{
                "product_code": "BROKEN",
                "product_name": "Broken Plan",
                "min_age": 18,
                "max_age": 65,
                "coverage_range": { "min": "100000" },
                "duration_options": [],
                "base_premium_rate": "0.00008",
                "currency": "USD",
                "coverage_unit": "lakh"
            }]
        }"#;

        match PolicyCatalog::from_json(json) {
            Err(CatalogError::Misconfigured { product_code, source }) => {
                assert_eq!(product_code, "BROKEN");
                assert_eq!(source, TermsError::NoDurationOptions);
            }
            other => panic!("expected misconfiguration, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_duplicate_product_code_rejected() {
        let mut catalog = PolicyCatalog::new();
        let terms = PolicyTerms {
            product_code: "TAKAFUL_TERM".to_string(),
            product_name: "Term Takaful Plan".to_string(),
            min_age: 18,
            max_age: 65,
            coverage_range: CoverageRange::new(dec!(100000), dec!(5000000)),
            duration_options: vec![10],
            base_premium_rate: Rate::new(dec!(0.00008)),
            currency: Currency::USD,
            coverage_unit: CoverageUnit::Lakh,
        };

        catalog.register(terms.clone()).unwrap();
        assert!(matches!(
            catalog.register(terms),
            Err(CatalogError::DuplicateProduct(_))
        ));
    }
}
