//! Java type mapping.
//!
//! Maps schema type references to Java type names. Required fields of
//! numeric or boolean base kinds map to unboxed primitives; optional
//! fields map to the wrapper classes.

use crate::error::CodegenError;
use rdlgen_schema::{BaseType, RegisteredType, SchemaError, TypeDef, TypeRegistry};

/// Java reserved words that cannot be used as identifiers.
const JAVA_RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Maps a type reference to its Java type name.
///
/// `items` and `keys` are the inline collection overrides a field may
/// declare when its type is a bare `Array` or `Map` reference; a named
/// collection typedef carries its own parameters instead.
///
/// # Errors
/// Returns `CodegenError` if the reference or any collection parameter
/// does not resolve.
pub fn java_type(
    registry: &TypeRegistry<'_>,
    type_ref: &str,
    optional: bool,
    items: Option<&str>,
    keys: Option<&str>,
) -> Result<String, CodegenError> {
    let resolved = registry
        .resolve(type_ref)
        .ok_or_else(|| SchemaError::unknown_type(type_ref))?;
    let (base, defined) = match resolved {
        RegisteredType::Builtin(bt) => (bt, None),
        RegisteredType::Defined(def) => (registry.base_type(def)?, Some(def)),
    };

    match base {
        BaseType::Bool => Ok(primitive(optional, "boolean", "Boolean")),
        BaseType::Int8 => Ok(primitive(optional, "byte", "Byte")),
        BaseType::Int16 => Ok(primitive(optional, "short", "Short")),
        BaseType::Int32 => Ok(primitive(optional, "int", "Integer")),
        BaseType::Int64 => Ok(primitive(optional, "long", "Long")),
        BaseType::Float32 => Ok(primitive(optional, "float", "Float")),
        BaseType::Float64 => Ok(primitive(optional, "double", "Double")),
        BaseType::Bytes => Ok("byte[]".to_string()),
        BaseType::String => Ok("String".to_string()),
        BaseType::Any => Ok("Object".to_string()),
        BaseType::Timestamp | BaseType::Symbol | BaseType::Uuid => Ok(match defined {
            Some(def) => capitalize(def.name()),
            None => base.name().to_string(),
        }),
        BaseType::Array => {
            let elem_ref = match defined {
                Some(TypeDef::Array(at)) => at.items.as_deref(),
                _ => items,
            };
            let elem = match elem_ref {
                Some(r) if !r.eq_ignore_ascii_case("any") => {
                    java_type(registry, r, false, None, None)?
                }
                _ => "Object".to_string(),
            };
            Ok(format!("List<{elem}>"))
        }
        BaseType::Map => {
            let (key_ref, value_ref) = match defined {
                Some(TypeDef::Map(mt)) => (mt.keys.as_deref(), mt.items.as_deref()),
                _ => (keys, items),
            };
            let key = match key_ref {
                Some(r) if !r.eq_ignore_ascii_case("any") => {
                    java_type(registry, r, false, None, None)?
                }
                Some(_) => "Object".to_string(),
                None => "String".to_string(),
            };
            let value = match value_ref {
                Some(r) if !r.eq_ignore_ascii_case("any") => {
                    java_type(registry, r, false, None, None)?
                }
                _ => "Object".to_string(),
            };
            Ok(format!("Map<{key}, {value}>"))
        }
        BaseType::Struct => Ok(match defined {
            Some(def) => capitalize(def.name()),
            None => "Object".to_string(),
        }),
        BaseType::Enum | BaseType::Union => Ok(match defined {
            Some(def) => capitalize(def.name()),
            None => "Object".to_string(),
        }),
    }
}

fn primitive(optional: bool, unboxed: &str, boxed: &str) -> String {
    if optional { boxed } else { unboxed }.to_string()
}

/// Returns true if a required field of this base kind maps to an
/// unboxed Java primitive.
#[must_use]
pub fn is_primitive_base(base: BaseType) -> bool {
    base.is_numeric() || base == BaseType::Bool
}

/// Capitalizes the first character, for Java class and file names.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercases the first character, for Java parameter names.
#[must_use]
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Maps a schema field name to a legal Java field name. Reserved words
/// get a leading underscore; emission sites preserve the wire name with
/// a `@JsonProperty` annotation.
#[must_use]
pub fn java_field_name(name: &str) -> String {
    if JAVA_RESERVED.contains(&name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}
