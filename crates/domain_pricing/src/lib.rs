//! Contribution Pricing Domain
//!
//! This crate implements the contribution quoting logic for the Takaful
//! marketplace: the one canonical calculator the product surfaces share,
//! together with the policy terms it prices against.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Value Objects**: [`PolicyTerms`], [`QuoteRequest`], [`ContributionQuote`]
//! - **Validation**: field-keyed, all-rules-evaluated request validation
//! - **Calculator**: the pure [`calculator::quote`] function
//! - **Catalog**: JSON-backed product terms loading and lookup
//!
//! # Quote flow
//!
//! ```text
//! QuoteSubmission --parse--> QuoteRequest --validate--> arithmetic --> ContributionQuote
//!        \-> field errors          \-> field errors
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_pricing::{calculator, PolicyCatalog, QuoteSubmission};
//!
//! let catalog = PolicyCatalog::from_json(products_json)?;
//! let terms = catalog.get("TAKAFUL_TERM").ok_or("unknown product")?;
//!
//! let request = submission.parse()?;
//! let quote = calculator::quote(&terms, &request)?;
//! println!("{} / month", quote.monthly_contribution);
//! ```

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod quote;
pub mod submission;
pub mod terms;
pub mod validation;

pub use calculator::quote;
pub use catalog::{CatalogError, PolicyCatalog};
pub use error::{QuoteError, TermsError};
pub use quote::{ContributionQuote, Gender, QuoteRequest, SmokerStatus};
pub use submission::QuoteSubmission;
pub use terms::{CoverageRange, CoverageUnit, PolicyTerms};
pub use validation::{validate_request, QuoteField, ValidationErrors};
