//! # rdlgen Codegen
//!
//! Java model source generation from RDL schemas.
//!
//! This crate provides:
//! - Type mapping from schema references to Java type names
//! - Struct, union, and enum class emission
//! - A streaming Jackson deserializer for tagged unions
//! - A generation driver writing one `.java` unit per declared type

pub mod error;
pub mod format;
pub mod generator;
pub mod java;
pub mod output;

pub use error::CodegenError;
pub use generator::{GeneratorOptions, generate_from_file, generate_model};
