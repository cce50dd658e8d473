//! Schema module
//!
//! Turns the API's published Swagger definitions into the JSON Schemas
//! advertised in the catalog.
//!
//! # Features
//!
//! - **Definition Lookup**: `SchemaCatalog` wraps the `definitions` section
//! - **Keyword Filtering**: Swagger-only keywords are dropped
//! - **Reference Inlining**: `$ref`s to local definitions are expanded

mod mapping;
mod types;

pub use mapping::{map_definition, MAX_REF_DEPTH};
pub use types::{AdditionalProperties, JsonType, JsonTypeOrArray, Schema, SchemaCatalog};
