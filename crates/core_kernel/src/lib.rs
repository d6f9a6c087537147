//! Core Kernel - Foundational types and utilities for the Takaful pricing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Common identifiers and value objects

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, Rate, MoneyError};
pub use identifiers::{ProductId, QuoteId};
