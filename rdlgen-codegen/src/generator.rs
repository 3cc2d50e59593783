//! Generation driver.
//!
//! Walks a schema's type declarations in order, dispatches each to the
//! matching emitter, and writes one output unit per generated type plus
//! one schema-descriptor unit. Generation stops at the first error.

use crate::error::CodegenError;
use crate::format::escape_java;
use crate::java::types::capitalize;
use crate::java::{
    EnumEmitter, StructEmitter, UNIT_EXT, UnionEmitter, generation_header, type_comment,
    unit_header,
};
use crate::output::{package_dir, write_unit};
use rdlgen_schema::{BaseType, Schema, TypeDef, TypeRegistry};
use std::path::{Path, PathBuf};

/// Options for a generation run.
pub struct GeneratorOptions {
    out_dir: PathBuf,
    namespace: Option<String>,
    banner: String,
}

impl GeneratorOptions {
    /// Creates options with the given output root directory.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            namespace: None,
            banner: format!("rdlgen {}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Overrides the schema's namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the banner named in each unit's generated-file comment.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }
}

/// Generates the Java model for a schema: one `.java` unit per struct,
/// union, enum, and alias-of-struct declaration, plus one schema
/// descriptor unit.
///
/// # Errors
/// Returns `CodegenError` on the first unresolvable reference,
/// unsupported construct, or IO failure. No partial-unit cleanup is
/// attempted.
pub fn generate_model(schema: &Schema, options: &GeneratorOptions) -> Result<(), CodegenError> {
    let namespace = options
        .namespace
        .as_deref()
        .or(schema.namespace.as_deref())
        .filter(|ns| !ns.is_empty());
    let dir = package_dir(&options.out_dir, namespace.unwrap_or(""));
    let registry = TypeRegistry::new(schema);

    tracing::info!(
        schema = %schema.name,
        types = schema.types.len(),
        "generating Java model"
    );
    for def in &schema.types {
        if let Some(contents) = emit_type(&registry, def, namespace, &options.banner)? {
            let c_name = capitalize(def.name());
            let path = write_unit(&dir, &c_name, UNIT_EXT, &contents)?;
            tracing::debug!(unit = %path.display(), "wrote output unit");
        }
    }

    let c_name = format!("{}Schema", capitalize(&schema.name));
    let descriptor = emit_descriptor(schema, &c_name, namespace, &options.banner);
    let path = write_unit(&dir, &c_name, UNIT_EXT, &descriptor)?;
    tracing::debug!(unit = %path.display(), "wrote schema descriptor");
    Ok(())
}

/// Emits one type declaration, or `None` for kinds that produce no
/// output unit. Each kind is an explicit arm so a new kind fails to
/// compile rather than silently emitting nothing.
fn emit_type(
    registry: &TypeRegistry<'_>,
    def: &TypeDef,
    namespace: Option<&str>,
    banner: &str,
) -> Result<Option<String>, CodegenError> {
    let mut out = unit_header(registry, def, namespace, banner)?;
    out.push('\n');
    match def {
        TypeDef::Struct(st) => {
            StructEmitter::new(registry, st).emit(&mut out)?;
            Ok(Some(out))
        }
        TypeDef::Union(ut) => {
            UnionEmitter::new(registry, ut, namespace).emit(&mut out)?;
            Ok(Some(out))
        }
        TypeDef::Enum(et) => {
            EnumEmitter::new(et).emit(&mut out);
            Ok(Some(out))
        }
        TypeDef::Array(_) | TypeDef::Map(_) => Ok(None),
        TypeDef::Alias(at) => {
            // Only an alias of a struct gets a unit: a named class shell.
            // Aliases of primitives and collections appear inline at
            // their use sites instead.
            if registry.find_base_type(&at.type_ref)? == BaseType::Struct {
                StructEmitter::emit_alias_shell(at, &mut out);
                Ok(Some(out))
            } else {
                Ok(None)
            }
        }
    }
}

/// Emits the schema-descriptor unit: a final class holding the schema's
/// metadata and the declared type names.
fn emit_descriptor(
    schema: &Schema,
    c_name: &str,
    namespace: Option<&str>,
    banner: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&generation_header(banner));
    out.push_str("\n\n");
    if let Some(ns) = namespace {
        out.push_str(&format!("package {ns};\n"));
    }
    out.push('\n');
    out.push_str(&type_comment(c_name, schema.comment.as_deref()));
    out.push_str(&format!("public final class {c_name} {{\n"));
    out.push_str(&format!(
        "    public static final String NAME = \"{}\";\n",
        escape_java(&schema.name)
    ));
    if let Some(version) = schema.version {
        out.push_str(&format!("    public static final int VERSION = {version};\n"));
    }
    if let Some(ns) = namespace {
        out.push_str(&format!(
            "    public static final String NAMESPACE = \"{}\";\n",
            escape_java(ns)
        ));
    }
    out.push_str("    public static final String[] TYPE_NAMES = {\n");
    let last = schema.types.len().saturating_sub(1);
    for (i, def) in schema.types.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        out.push_str(&format!("        \"{}\"{sep}\n", escape_java(def.name())));
    }
    out.push_str("    };\n\n");
    out.push_str(&format!("    private {c_name}() {{\n    }}\n"));
    out.push_str("}\n");
    out
}

/// Generates the Java model from a schema file.
///
/// # Errors
/// Returns `CodegenError` if loading the schema or generation fails.
pub fn generate_from_file(
    path: &Path,
    options: &GeneratorOptions,
) -> Result<(), CodegenError> {
    let schema = rdlgen_schema::parse_schema_file(path)?;
    generate_model(&schema, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdlgen_schema::parse_schema;

    fn sample_json() -> &'static str {
        r#"{
            "namespace": "com.example.model",
            "name": "sample",
            "version": 2,
            "types": [
                {"Enum": {"name": "Suit", "type": "Enum", "elements": [
                    {"symbol": "CLUBS"},
                    {"symbol": "HEARTS"}
                ]}},
                {"Struct": {"name": "Point", "type": "Struct", "fields": [
                    {"name": "x", "type": "Int32"},
                    {"name": "y", "type": "Int32", "optional": true}
                ]}},
                {"Alias": {"name": "StringId", "type": "String"}},
                {"Alias": {"name": "IntId", "type": "Int32"}},
                {"Union": {"name": "Id", "type": "Union", "variants": ["StringId", "IntId"]}},
                {"Array": {"name": "Points", "type": "Array", "items": "Point"}},
                {"Alias": {"name": "Origin", "type": "Point"}}
            ]
        }"#
    }

    #[test]
    fn test_generate_model_writes_expected_units() {
        let schema = parse_schema(sample_json()).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path());

        generate_model(&schema, &options).expect("generate");

        let dir = tmp.path().join("com").join("example").join("model");
        assert!(dir.join("Suit.java").exists());
        assert!(dir.join("Point.java").exists());
        assert!(dir.join("Id.java").exists());
        assert!(dir.join("Origin.java").exists());
        assert!(dir.join("SampleSchema.java").exists());
        // Array typedefs and primitive aliases produce no unit.
        assert!(!dir.join("Points.java").exists());
        assert!(!dir.join("StringId.java").exists());
        assert!(!dir.join("IntId.java").exists());
    }

    #[test]
    fn test_generated_unit_contents() {
        let schema = parse_schema(sample_json()).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path()).banner("rdlgen-test");

        generate_model(&schema, &options).expect("generate");

        let dir = tmp.path().join("com").join("example").join("model");
        let point = std::fs::read_to_string(dir.join("Point.java")).expect("read Point");
        assert!(point.starts_with("//\n// This file generated by rdlgen-test. Do not modify!\n//"));
        assert!(point.contains("package com.example.model;\n"));
        assert!(point.contains("public class Point {"));
        assert!(point.contains("    public int x;\n"));
        assert!(point.contains("    @RdlOptional\n    public Integer y;\n"));

        let id = std::fs::read_to_string(dir.join("Id.java")).expect("read Id");
        assert!(id.contains("@JsonDeserialize(using = Id.IdJsonDeserializer.class)"));
        assert!(id.contains("import com.fasterxml.jackson.core.JsonParser;"));

        let origin = std::fs::read_to_string(dir.join("Origin.java")).expect("read Origin");
        assert!(origin.contains("public class Origin {\n}\n"));
    }

    #[test]
    fn test_descriptor_contents() {
        let schema = parse_schema(sample_json()).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path());

        generate_model(&schema, &options).expect("generate");

        let dir = tmp.path().join("com").join("example").join("model");
        let descriptor =
            std::fs::read_to_string(dir.join("SampleSchema.java")).expect("read descriptor");
        assert!(descriptor.contains("public final class SampleSchema {"));
        assert!(descriptor.contains("    public static final String NAME = \"sample\";\n"));
        assert!(descriptor.contains("    public static final int VERSION = 2;\n"));
        assert!(descriptor
            .contains("    public static final String NAMESPACE = \"com.example.model\";\n"));
        assert!(descriptor.contains("        \"Suit\",\n"));
        assert!(descriptor.contains("        \"Origin\"\n"));
        assert!(descriptor.contains("    private SampleSchema() {\n    }\n"));
    }

    #[test]
    fn test_namespace_override() {
        let schema = parse_schema(sample_json()).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path()).namespace("org.other");

        generate_model(&schema, &options).expect("generate");

        let dir = tmp.path().join("org").join("other");
        assert!(dir.join("Point.java").exists());
        let point = std::fs::read_to_string(dir.join("Point.java")).expect("read Point");
        assert!(point.contains("package org.other;\n"));
    }

    #[test]
    fn test_empty_namespace_writes_to_root() {
        let json = r#"{
            "name": "bare",
            "types": [
                {"Struct": {"name": "Point", "type": "Struct", "fields": [
                    {"name": "x", "type": "Int32"}
                ]}}
            ]
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path());

        generate_model(&schema, &options).expect("generate");

        let point =
            std::fs::read_to_string(tmp.path().join("Point.java")).expect("read Point");
        assert!(!point.contains("package "));
        assert!(tmp.path().join("BareSchema.java").exists());
    }

    #[test]
    fn test_generation_fails_fast_on_array_union() {
        let json = r#"{
            "name": "sample",
            "types": [
                {"Array": {"name": "Names", "type": "Array", "items": "String"}},
                {"Union": {"name": "Bad", "type": "Union", "variants": ["Names"]}}
            ]
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path());

        let result = generate_model(&schema, &options);
        assert!(matches!(result, Err(CodegenError::Unsupported { .. })));
        // Fail-fast: the descriptor after the failing type is not written.
        assert!(!tmp.path().join("SampleSchema.java").exists());
    }

    #[test]
    fn test_generation_fails_on_unknown_reference() {
        let json = r#"{
            "name": "sample",
            "types": [
                {"Struct": {"name": "Broken", "type": "Struct", "fields": [
                    {"name": "x", "type": "Missing"}
                ]}}
            ]
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = GeneratorOptions::new(tmp.path());

        let result = generate_model(&schema, &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_from_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let schema_path = tmp.path().join("sample.json");
        std::fs::write(&schema_path, sample_json()).expect("write schema");
        let out_dir = tmp.path().join("out");

        let options = GeneratorOptions::new(&out_dir);
        generate_from_file(&schema_path, &options).expect("generate");

        assert!(out_dir
            .join("com")
            .join("example")
            .join("model")
            .join("Point.java")
            .exists());
    }
}
