//! # rdlgen Schema
//!
//! RDL schema data model and type resolution.
//!
//! This crate provides:
//! - JSON schema loading
//! - Type definitions for schema declarations
//! - A resolved type registry for code generation

pub mod error;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::SchemaError;
pub use parser::{parse_schema, parse_schema_file};
pub use registry::{RegisteredType, TypeRegistry};
pub use types::{
    AliasTypeDef, ArrayTypeDef, BaseType, EnumElementDef, EnumTypeDef, FieldDef, MapTypeDef,
    Schema, StructTypeDef, TypeDef, UnionTypeDef,
};
