//! Vellum Core Types and Definitions
//!
//! This crate provides the foundational types for the Vellum diagram
//! toolkit. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Validated CSS color strings ([`color::Color`])
//! - **Styles**: Node shapes, edge styles, and rank direction ([`style`] module)
//! - **Semantic**: Semantic model types for diagrams ([`semantic`] module)

pub mod color;
pub mod identifier;
pub mod semantic;
pub mod style;
