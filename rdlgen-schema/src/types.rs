//! Schema type definitions.
//!
//! This module contains the data structures representing RDL schema
//! declarations including structs, unions, enums, aliases, and the
//! collection typedefs.

use serde::{Deserialize, Serialize};

/// Complete RDL schema definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Namespace the generated types belong to.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Schema name.
    pub name: String,
    /// Schema version.
    #[serde(default)]
    pub version: Option<i32>,
    /// Schema description.
    #[serde(default)]
    pub comment: Option<String>,
    /// Type declarations, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

/// Type declaration variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TypeDef {
    /// Struct type declaration.
    Struct(StructTypeDef),
    /// Union type declaration.
    Union(UnionTypeDef),
    /// Enum type declaration.
    Enum(EnumTypeDef),
    /// Array typedef declaration.
    Array(ArrayTypeDef),
    /// Map typedef declaration.
    Map(MapTypeDef),
    /// Alias declaration (a pure rename of another type).
    Alias(AliasTypeDef),
}

impl TypeDef {
    /// Returns the name of the declared type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Struct(st) => &st.name,
            Self::Union(ut) => &ut.name,
            Self::Enum(et) => &et.name,
            Self::Array(at) => &at.name,
            Self::Map(mt) => &mt.name,
            Self::Alias(at) => &at.name,
        }
    }

    /// Returns the base type reference as written in the declaration.
    #[must_use]
    pub fn type_ref(&self) -> &str {
        match self {
            Self::Struct(st) => &st.type_ref,
            Self::Union(ut) => &ut.type_ref,
            Self::Enum(et) => &et.type_ref,
            Self::Array(at) => &at.type_ref,
            Self::Map(mt) => &mt.type_ref,
            Self::Alias(at) => &at.type_ref,
        }
    }

    /// Returns the declaration comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Struct(st) => st.comment.as_deref(),
            Self::Union(ut) => ut.comment.as_deref(),
            Self::Enum(et) => et.comment.as_deref(),
            Self::Array(at) => at.comment.as_deref(),
            Self::Map(mt) => mt.comment.as_deref(),
            Self::Alias(at) => at.comment.as_deref(),
        }
    }
}

/// Struct type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference ("Struct" or a parent struct name).
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Declared fields, in declaration order. Inherited fields are not
    /// repeated here; they come from the base type reference chain.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Whether the struct is closed to extension.
    #[serde(default)]
    pub closed: bool,
}

/// Union type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnionTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference (always "Union").
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Variant type references, in declaration order.
    #[serde(default)]
    pub variants: Vec<String>,
}

/// Enum type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference (always "Enum").
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Enum elements, in declaration order.
    #[serde(default)]
    pub elements: Vec<EnumElementDef>,
}

/// A single enum element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumElementDef {
    /// Symbolic constant name.
    pub symbol: String,
    /// Element comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Array typedef declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference (always "Array").
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Element type reference. Absent means `Any`.
    #[serde(default)]
    pub items: Option<String>,
}

/// Map typedef declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTypeDef {
    /// Type name.
    pub name: String,
    /// Base type reference (always "Map").
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Key type reference. Absent means `String`.
    #[serde(default)]
    pub keys: Option<String>,
    /// Value type reference. Absent means `Any`.
    #[serde(default)]
    pub items: Option<String>,
}

/// Alias declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasTypeDef {
    /// Type name.
    pub name: String,
    /// The aliased type reference.
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Declaration comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Struct field declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as written in the schema.
    pub name: String,
    /// Field type reference.
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Whether the field may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Default value literal, if declared.
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    /// Element type override for inline `Array` fields.
    #[serde(default)]
    pub items: Option<String>,
    /// Key type override for inline `Map` fields.
    #[serde(default)]
    pub keys: Option<String>,
    /// Field comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Built-in base types every reference ultimately resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Byte sequence.
    Bytes,
    /// UTF-8 string.
    String,
    /// Point in time.
    Timestamp,
    /// Interned string.
    Symbol,
    /// RFC 4122 UUID.
    Uuid,
    /// Ordered collection.
    Array,
    /// Keyed collection.
    Map,
    /// Open record.
    Struct,
    /// Symbolic enumeration.
    Enum,
    /// Tagged union.
    Union,
    /// Any value.
    Any,
}

impl BaseType {
    /// Parses a base type from its schema name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bool" => Some(Self::Bool),
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "bytes" => Some(Self::Bytes),
            "string" => Some(Self::String),
            "timestamp" => Some(Self::Timestamp),
            "symbol" => Some(Self::Symbol),
            "uuid" => Some(Self::Uuid),
            "array" => Some(Self::Array),
            "map" => Some(Self::Map),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "union" => Some(Self::Union),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    /// Returns the canonical schema name of the base type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Bytes => "Bytes",
            Self::String => "String",
            Self::Timestamp => "Timestamp",
            Self::Symbol => "Symbol",
            Self::Uuid => "UUID",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Struct => "Struct",
            Self::Enum => "Enum",
            Self::Union => "Union",
            Self::Any => "Any",
        }
    }

    /// Returns true if values of this base type are numeric.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64
        )
    }
}
