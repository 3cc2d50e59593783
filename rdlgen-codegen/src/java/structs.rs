//! Struct emission.
//!
//! Emits one Java record class per struct declaration: the flattened
//! field list, fluent setters, an optional default-value initializer,
//! and structural equality.

use crate::error::CodegenError;
use crate::format::{format_comment, is_zero_value, java_literal};
use crate::java::types::{capitalize, is_primitive_base, java_field_name, java_type};
use crate::java::{COMMENT_WIDTH, type_comment};
use rdlgen_schema::{AliasTypeDef, BaseType, FieldDef, StructTypeDef, TypeRegistry};

/// Emitter for struct declarations.
pub struct StructEmitter<'a> {
    registry: &'a TypeRegistry<'a>,
    def: &'a StructTypeDef,
}

impl<'a> StructEmitter<'a> {
    /// Creates a new struct emitter.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry<'a>, def: &'a StructTypeDef) -> Self {
        Self { registry, def }
    }

    /// Emits the struct class.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type reference does not resolve.
    pub fn emit(&self, out: &mut String) -> Result<(), CodegenError> {
        let c_name = capitalize(&self.def.name);
        let fields = self.registry.flattened_fields(self.def)?;

        out.push_str(&type_comment(&c_name, self.def.comment.as_deref()));
        emit_class_open(out, &c_name, self.def.closed);
        self.emit_fields(out, &c_name, &fields)?;
        self.emit_init(out, &c_name, &fields)?;
        out.push_str("}\n");
        Ok(())
    }

    /// Emits the class shell for an alias of a struct type: the same
    /// annotation and declaration with no fields or methods. The type
    /// exists purely to carry a constrained name.
    pub fn emit_alias_shell(at: &AliasTypeDef, out: &mut String) {
        let c_name = capitalize(&at.name);
        out.push_str(&type_comment(&c_name, at.comment.as_deref()));
        emit_class_open(out, &c_name, false);
        out.push_str("}\n");
    }

    fn emit_fields(
        &self,
        out: &mut String,
        c_name: &str,
        fields: &[&FieldDef],
    ) -> Result<(), CodegenError> {
        let mut names = Vec::with_capacity(fields.len());
        let mut types = Vec::with_capacity(fields.len());
        for field in fields {
            let f_name = java_field_name(&field.name);
            let f_type = java_type(
                self.registry,
                &field.type_ref,
                field.optional,
                field.items.as_deref(),
                field.keys.as_deref(),
            )?;
            if let Some(comment) = &field.comment {
                out.push_str(&format_comment(comment, 4, COMMENT_WIDTH));
            }
            if f_name != field.name {
                out.push_str(&format!(
                    "    @com.fasterxml.jackson.annotation.JsonProperty(\"{}\")\n",
                    field.name
                ));
            }
            if field.optional {
                out.push_str("    @RdlOptional\n");
            }
            out.push_str(&format!("    public {f_type} {f_name};\n"));
            names.push(f_name);
            types.push(f_type);
        }

        out.push('\n');
        for (f_name, f_type) in names.iter().zip(&types) {
            out.push_str(&format!(
                "    public {c_name} {f_name}({f_type} {f_name}) {{\n        this.{f_name} = {f_name};\n        return this;\n    }}\n"
            ));
        }

        out.push('\n');
        out.push_str("    @Override\n    public boolean equals(Object another) {\n");
        out.push_str("        if (this != another) {\n");
        out.push_str(&format!(
            "            if (another == null || another.getClass() != {c_name}.class) {{\n"
        ));
        out.push_str("                return false;\n");
        out.push_str("            }\n");
        out.push_str(&format!("            {c_name} a = ({c_name}) another;\n"));
        for (field, f_name) in fields.iter().zip(&names) {
            if self.is_primitive_field(field)? {
                out.push_str(&format!("            if ({f_name} != a.{f_name}) {{\n"));
            } else {
                out.push_str(&format!(
                    "            if ({f_name} == null ? a.{f_name} != null : !{f_name}.equals(a.{f_name})) {{\n"
                ));
            }
            out.push_str("                return false;\n");
            out.push_str("            }\n");
        }
        out.push_str("        }\n");
        out.push_str("        return true;\n");
        out.push_str("    }\n");
        Ok(())
    }

    /// Emits the `init()` default initializer when at least one of the
    /// struct's own fields carries a non-zero-valued default. Guards test
    /// the Java zero value, so a field explicitly set to zero is
    /// indistinguishable from an unset field and gets re-defaulted.
    fn emit_init(
        &self,
        out: &mut String,
        c_name: &str,
        fields: &[&FieldDef],
    ) -> Result<(), CodegenError> {
        if !self.has_field_default()? {
            return Ok(());
        }
        out.push_str(
            "\n    //\n    // sets up the instance according to its default field values, if any\n    //\n",
        );
        out.push_str(&format!("    public {c_name} init() {{\n"));
        for field in fields {
            let Some(default) = &field.default else {
                continue;
            };
            let f_name = java_field_name(&field.name);
            if self.is_primitive_field(field)? {
                let base = self.registry.find_base_type(&field.type_ref)?;
                if base == BaseType::Bool {
                    out.push_str(&format!("        if (!{f_name}) {{\n"));
                } else {
                    out.push_str(&format!("        if ({f_name} == 0) {{\n"));
                }
            } else {
                out.push_str(&format!("        if ({f_name} == null) {{\n"));
            }
            out.push_str(&format!("            {f_name} = {};\n", java_literal(default)));
            out.push_str("        }\n");
        }
        out.push_str("        return this;\n");
        out.push_str("    }\n");
        Ok(())
    }

    fn is_primitive_field(&self, field: &FieldDef) -> Result<bool, CodegenError> {
        if field.optional {
            return Ok(false);
        }
        let base = self.registry.find_base_type(&field.type_ref)?;
        Ok(is_primitive_base(base))
    }

    /// True when one of the struct's own declared fields carries a
    /// default that is not the zero value of its base kind.
    fn has_field_default(&self) -> Result<bool, CodegenError> {
        for field in &self.def.fields {
            let Some(default) = &field.default else {
                continue;
            };
            match self.registry.find_base_type(&field.type_ref)? {
                BaseType::String
                | BaseType::Symbol
                | BaseType::Uuid
                | BaseType::Timestamp
                | BaseType::Bool
                | BaseType::Int8
                | BaseType::Int16
                | BaseType::Int32
                | BaseType::Int64
                | BaseType::Float32
                | BaseType::Float64 => {
                    if !is_zero_value(default) {
                        return Ok(true);
                    }
                }
                _ => {}
            }
        }
        Ok(false)
    }
}

fn emit_class_open(out: &mut String, c_name: &str, closed: bool) {
    out.push_str("@JsonSerialize(include = JsonSerialize.Inclusion.NON_DEFAULT)\n");
    let s_final = if closed { "final " } else { "" };
    out.push_str(&format!("public {s_final}class {c_name} {{\n"));
}
