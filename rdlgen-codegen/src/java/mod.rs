//! Java model emission modules.

pub mod enums;
pub mod structs;
pub mod types;
pub mod unions;

pub use enums::EnumEmitter;
pub use structs::StructEmitter;
pub use unions::UnionEmitter;

use crate::error::CodegenError;
use crate::format::format_comment;
use rdlgen_schema::{BaseType, TypeDef, TypeRegistry};

/// Column budget for wrapped comments.
pub const COMMENT_WIDTH: usize = 80;

/// Package holding the runtime annotations generated code refers to.
pub const RUNTIME_PACKAGE: &str = "com.rdlgen.data";

/// Output unit file extension.
pub const UNIT_EXT: &str = ".java";

/// Renders the type header comment, `// Name - comment`.
#[must_use]
pub fn type_comment(name: &str, comment: Option<&str>) -> String {
    let mut s = format!("{name} -");
    if let Some(c) = comment {
        s.push(' ');
        s.push_str(c);
    }
    format_comment(&s, 0, COMMENT_WIDTH)
}

/// Renders the generated-file banner comment.
#[must_use]
pub fn generation_header(banner: &str) -> String {
    format!("//\n// This file generated by {banner}. Do not modify!\n//")
}

/// Renders the header of one output unit: banner, package declaration,
/// and the import block the unit's base kind requires.
///
/// # Errors
/// Returns `CodegenError` if a field type reference does not resolve.
pub fn unit_header(
    registry: &TypeRegistry<'_>,
    def: &TypeDef,
    namespace: Option<&str>,
    banner: &str,
) -> Result<String, CodegenError> {
    let base = registry.base_type(def)?;
    let mut out = String::new();

    out.push_str(&generation_header(banner));
    out.push_str("\n\n");
    if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
        out.push_str(&format!("package {ns};\n"));
    }
    out.push_str(&indirect_imports(registry, def)?);
    if namespace != Some(RUNTIME_PACKAGE) {
        out.push_str(&format!("import {RUNTIME_PACKAGE}.*;\n"));
    }
    if base == BaseType::Union {
        out.push_str("import java.io.IOException;\n");
        out.push_str("import com.fasterxml.jackson.core.JsonParser;\n");
        out.push_str("import com.fasterxml.jackson.core.JsonProcessingException;\n");
        out.push_str("import com.fasterxml.jackson.core.JsonToken;\n");
        out.push_str("import com.fasterxml.jackson.databind.DeserializationContext;\n");
        out.push_str("import com.fasterxml.jackson.databind.JsonDeserializer;\n");
        out.push_str("import com.fasterxml.jackson.databind.annotation.JsonDeserialize;\n");
    }
    if base != BaseType::Enum {
        out.push_str("import com.fasterxml.jackson.databind.annotation.JsonSerialize;\n");
    }
    Ok(out)
}

/// Collection imports needed by a struct's flattened fields, resolved
/// through the registry so named array/map typedefs and aliases count.
fn indirect_imports(
    registry: &TypeRegistry<'_>,
    def: &TypeDef,
) -> Result<String, CodegenError> {
    let mut needs_list = false;
    let mut needs_map = false;
    if let TypeDef::Struct(st) = def {
        for field in registry.flattened_fields(st)? {
            match registry.find_base_type(&field.type_ref)? {
                BaseType::Array => needs_list = true,
                BaseType::Map => needs_map = true,
                _ => {}
            }
        }
    }
    let mut out = String::new();
    if needs_list {
        out.push_str("import java.util.List;\n");
    }
    if needs_map {
        out.push_str("import java.util.Map;\n");
    }
    Ok(out)
}
