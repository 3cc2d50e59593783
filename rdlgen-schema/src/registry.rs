//! Resolved type registry.
//!
//! This module provides name resolution over a schema: a case-insensitive
//! index of declared types and built-in base types, base kind lookup
//! through alias chains, and struct field flattening for code generation.

use crate::error::SchemaError;
use crate::types::{BaseType, FieldDef, Schema, StructTypeDef, TypeDef};
use std::collections::HashMap;

/// A name resolved through the registry.
#[derive(Debug, Clone, Copy)]
pub enum RegisteredType<'a> {
    /// A built-in base type.
    Builtin(BaseType),
    /// A type declared in the schema.
    Defined(&'a TypeDef),
}

/// Case-insensitive index over a schema's declared types and the
/// built-in base types.
#[derive(Debug)]
pub struct TypeRegistry<'a> {
    schema: &'a Schema,
    by_name: HashMap<String, usize>,
}

impl<'a> TypeRegistry<'a> {
    /// Builds a registry over a schema.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        let mut by_name = HashMap::with_capacity(schema.types.len());
        for (idx, def) in schema.types.iter().enumerate() {
            by_name.insert(def.name().to_ascii_lowercase(), idx);
        }
        Self { schema, by_name }
    }

    /// Resolves a type reference by name, case-insensitively.
    ///
    /// Declared types shadow built-ins of the same name.
    #[must_use]
    pub fn resolve(&self, type_ref: &str) -> Option<RegisteredType<'a>> {
        if let Some(&idx) = self.by_name.get(&type_ref.to_ascii_lowercase()) {
            return Some(RegisteredType::Defined(&self.schema.types[idx]));
        }
        BaseType::from_name(type_ref).map(RegisteredType::Builtin)
    }

    /// Returns the base kind of a declared type.
    ///
    /// # Errors
    /// Returns `SchemaError` if an alias target does not resolve.
    pub fn base_type(&self, def: &TypeDef) -> Result<BaseType, SchemaError> {
        match def {
            TypeDef::Struct(_) => Ok(BaseType::Struct),
            TypeDef::Union(_) => Ok(BaseType::Union),
            TypeDef::Enum(_) => Ok(BaseType::Enum),
            TypeDef::Array(_) => Ok(BaseType::Array),
            TypeDef::Map(_) => Ok(BaseType::Map),
            TypeDef::Alias(at) => self.find_base_type(&at.type_ref),
        }
    }

    /// Returns the base kind an arbitrary reference resolves to,
    /// following alias chains.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownType` for an unresolvable reference
    /// and `SchemaError::CircularReference` for a cyclic alias chain.
    pub fn find_base_type(&self, type_ref: &str) -> Result<BaseType, SchemaError> {
        let mut seen: Vec<String> = Vec::new();
        let mut name: &str = type_ref;
        loop {
            let resolved = self
                .resolve(name)
                .ok_or_else(|| SchemaError::unknown_type(name))?;
            match resolved {
                RegisteredType::Builtin(bt) => return Ok(bt),
                RegisteredType::Defined(TypeDef::Alias(at)) => {
                    seen.push(name.to_string());
                    if seen.iter().any(|s| s.eq_ignore_ascii_case(&at.type_ref)) {
                        return Err(SchemaError::circular(type_ref));
                    }
                    name = &at.type_ref;
                }
                RegisteredType::Defined(def) => return self.base_type(def),
            }
        }
    }

    /// Returns the full field list of a struct, including fields inherited
    /// through its base type reference chain. Ancestor fields come first;
    /// declaration order is preserved within each level.
    ///
    /// # Errors
    /// Returns `SchemaError::CircularReference` if the base chain cycles.
    pub fn flattened_fields(
        &self,
        st: &'a StructTypeDef,
    ) -> Result<Vec<&'a FieldDef>, SchemaError> {
        let mut chain: Vec<&'a StructTypeDef> = vec![st];
        let mut current = st;
        while let Some(parent) = self.struct_parent(&current.type_ref)? {
            if chain.iter().any(|s| s.name.eq_ignore_ascii_case(&parent.name)) {
                return Err(SchemaError::circular(st.name.as_str()));
            }
            chain.push(parent);
            current = parent;
        }

        let mut fields = Vec::new();
        for st in chain.iter().rev() {
            fields.extend(st.fields.iter());
        }
        Ok(fields)
    }

    /// Resolves a reference to the struct declaration it names, following
    /// aliases. The built-in `Struct` and non-struct references yield
    /// `None`.
    fn struct_parent(&self, type_ref: &str) -> Result<Option<&'a StructTypeDef>, SchemaError> {
        let mut seen: Vec<String> = Vec::new();
        let mut name: &str = type_ref;
        loop {
            match self.resolve(name) {
                Some(RegisteredType::Defined(TypeDef::Struct(parent))) => {
                    return Ok(Some(parent));
                }
                Some(RegisteredType::Defined(TypeDef::Alias(at))) => {
                    seen.push(name.to_string());
                    if seen.iter().any(|s| s.eq_ignore_ascii_case(&at.type_ref)) {
                        return Err(SchemaError::circular(type_ref));
                    }
                    name = &at.type_ref;
                }
                _ => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    fn sample_schema() -> Schema {
        let json = r#"{
            "name": "sample",
            "types": [
                {"Struct": {"name": "Base", "type": "Struct", "fields": [
                    {"name": "id", "type": "String"}
                ]}},
                {"Struct": {"name": "Middle", "type": "Base", "fields": [
                    {"name": "label", "type": "String"}
                ]}},
                {"Struct": {"name": "Leaf", "type": "Middle", "fields": [
                    {"name": "count", "type": "Int32"}
                ]}},
                {"Alias": {"name": "Name", "type": "String"}},
                {"Alias": {"name": "Identifier", "type": "Name"}},
                {"Alias": {"name": "BaseRef", "type": "Base"}}
            ]
        }"#;
        parse_schema(json).expect("Failed to parse")
    }

    #[test]
    fn test_resolve_builtin() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        assert!(matches!(
            registry.resolve("String"),
            Some(RegisteredType::Builtin(BaseType::String))
        ));
        assert!(matches!(
            registry.resolve("int32"),
            Some(RegisteredType::Builtin(BaseType::Int32))
        ));
        assert!(registry.resolve("Missing").is_none());
    }

    #[test]
    fn test_resolve_defined_case_insensitive() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        match registry.resolve("leaf") {
            Some(RegisteredType::Defined(def)) => assert_eq!(def.name(), "Leaf"),
            other => panic!("expected defined type, got {other:?}"),
        }
    }

    #[test]
    fn test_find_base_type_through_aliases() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        assert_eq!(
            registry.find_base_type("Identifier").expect("resolve"),
            BaseType::String
        );
        assert_eq!(
            registry.find_base_type("BaseRef").expect("resolve"),
            BaseType::Struct
        );
        assert_eq!(
            registry.find_base_type("Leaf").expect("resolve"),
            BaseType::Struct
        );
    }

    #[test]
    fn test_find_base_type_unknown() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        let result = registry.find_base_type("Nope");
        assert!(matches!(result, Err(SchemaError::UnknownType { .. })));
    }

    #[test]
    fn test_find_base_type_circular() {
        let json = r#"{
            "name": "loop",
            "types": [
                {"Alias": {"name": "A", "type": "B"}},
                {"Alias": {"name": "B", "type": "A"}}
            ]
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let registry = TypeRegistry::new(&schema);

        let result = registry.find_base_type("A");
        assert!(matches!(result, Err(SchemaError::CircularReference { .. })));
    }

    #[test]
    fn test_flattened_fields_two_levels() {
        let schema = sample_schema();
        let registry = TypeRegistry::new(&schema);

        let leaf = match registry.resolve("Leaf") {
            Some(RegisteredType::Defined(TypeDef::Struct(st))) => st,
            other => panic!("expected struct, got {other:?}"),
        };
        let fields = registry.flattened_fields(leaf).expect("flatten");
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "label", "count"]);
    }

    #[test]
    fn test_flattened_fields_through_alias_parent() {
        let json = r#"{
            "name": "aliased",
            "types": [
                {"Struct": {"name": "Base", "type": "Struct", "fields": [
                    {"name": "id", "type": "String"}
                ]}},
                {"Alias": {"name": "BaseRef", "type": "Base"}},
                {"Struct": {"name": "Child", "type": "BaseRef", "fields": [
                    {"name": "extra", "type": "Int32"}
                ]}}
            ]
        }"#;
        let schema = parse_schema(json).expect("Failed to parse");
        let registry = TypeRegistry::new(&schema);

        let child = match registry.resolve("Child") {
            Some(RegisteredType::Defined(TypeDef::Struct(st))) => st,
            other => panic!("expected struct, got {other:?}"),
        };
        let fields = registry.flattened_fields(child).expect("flatten");
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "extra"]);
    }
}
