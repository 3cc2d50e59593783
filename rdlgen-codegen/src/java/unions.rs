//! Union emission.
//!
//! A union is serialized as a single-key object: one field whose name is
//! the variant's type name and whose value is the variant's payload.
//! There is no separate type tag on the wire, so the generated Jackson
//! deserializer recovers the variant from the field name plus the shape
//! of the value token that follows it.

use crate::error::CodegenError;
use crate::java::types::{capitalize, java_type, uncapitalize};
use crate::java::type_comment;
use rdlgen_schema::{BaseType, TypeRegistry, UnionTypeDef};

/// Variants grouped by the wire token shape of their payload. Exactly
/// one group matches any given value token during decoding.
#[derive(Debug, Default)]
struct VariantClasses<'a> {
    numeric: Vec<&'a str>,
    textual: Vec<&'a str>,
    boolean: Vec<&'a str>,
    structured: Vec<&'a str>,
}

/// Emitter for union declarations.
pub struct UnionEmitter<'a> {
    registry: &'a TypeRegistry<'a>,
    def: &'a UnionTypeDef,
    namespace: Option<&'a str>,
}

impl<'a> UnionEmitter<'a> {
    /// Creates a new union emitter. The namespace qualifies `fromString`
    /// references to enum variants in the textual decode branch.
    #[must_use]
    pub fn new(
        registry: &'a TypeRegistry<'a>,
        def: &'a UnionTypeDef,
        namespace: Option<&'a str>,
    ) -> Self {
        Self {
            registry,
            def,
            namespace,
        }
    }

    /// Emits the union class: discriminant enum, one slot per variant,
    /// equality, the streaming deserializer, and per-variant
    /// constructors.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a variant reference does
    /// not resolve, and `CodegenError::Unsupported` for array-kind
    /// variants, which have no decode branch.
    pub fn emit(&self, out: &mut String) -> Result<(), CodegenError> {
        let u_name = capitalize(&self.def.name);
        let classes = self.classify_variants()?;

        out.push_str(&type_comment(&u_name, self.def.comment.as_deref()));
        out.push_str("@JsonSerialize(include = JsonSerialize.Inclusion.NON_NULL)\n");
        out.push_str(&format!(
            "@JsonDeserialize(using = {u_name}.{u_name}JsonDeserializer.class)\n"
        ));
        out.push_str(&format!("public final class {u_name} {{\n"));

        self.emit_variant_enum(out, &u_name);
        self.emit_slots(out, &u_name)?;
        self.emit_equals(out, &u_name);
        self.emit_deserializer(out, &u_name, &classes)?;
        self.emit_constructors(out, &u_name)?;

        out.push_str("}\n");
        Ok(())
    }

    /// Partitions the variants into token-shape classes. Array variants
    /// abort generation: a sequence payload has no decode branch yet and
    /// must never be silently miscompiled.
    fn classify_variants(&self) -> Result<VariantClasses<'a>, CodegenError> {
        let mut classes = VariantClasses::default();
        for v in &self.def.variants {
            let base = self
                .registry
                .find_base_type(v)
                .map_err(|_| CodegenError::unknown_type(v.clone(), self.def.name.clone()))?;
            match base {
                BaseType::String
                | BaseType::Symbol
                | BaseType::Timestamp
                | BaseType::Uuid
                | BaseType::Enum => classes.textual.push(v.as_str()),
                BaseType::Bool => classes.boolean.push(v.as_str()),
                BaseType::Int8
                | BaseType::Int16
                | BaseType::Int32
                | BaseType::Int64
                | BaseType::Float32
                | BaseType::Float64 => classes.numeric.push(v.as_str()),
                BaseType::Array => {
                    return Err(CodegenError::unsupported(format!(
                        "union {} has array variant '{v}': unions of arrays are not implemented",
                        self.def.name
                    )));
                }
                BaseType::Map | BaseType::Struct => classes.structured.push(v.as_str()),
                other => {
                    return Err(CodegenError::unsupported(format!(
                        "union {} has variant '{v}' of base kind {}",
                        self.def.name,
                        other.name()
                    )));
                }
            }
        }
        Ok(classes)
    }

    fn emit_variant_enum(&self, out: &mut String, u_name: &str) {
        out.push_str(&format!("    public enum {u_name}Variant {{\n"));
        for (i, v) in self.def.variants.iter().enumerate() {
            if i == 0 {
                out.push_str("        ");
            } else {
                out.push_str(",\n        ");
            }
            out.push_str(v);
        }
        out.push_str("\n    }\n\n");
    }

    fn emit_slots(&self, out: &mut String, u_name: &str) -> Result<(), CodegenError> {
        out.push_str("    @com.fasterxml.jackson.annotation.JsonIgnore\n");
        out.push_str(&format!("    public {u_name}Variant variant;\n\n"));
        for v in &self.def.variants {
            let v_type = self.variant_type(v)?;
            out.push_str(&format!("    @RdlOptional public {v_type} {v};\n"));
        }
        out.push('\n');
        Ok(())
    }

    fn emit_equals(&self, out: &mut String, u_name: &str) {
        out.push_str("    @Override\n    public boolean equals(Object another) {\n");
        out.push_str("        if (this != another) {\n");
        out.push_str(&format!(
            "            if (another == null || another.getClass() != {u_name}.class) {{\n"
        ));
        out.push_str("                return false;\n");
        out.push_str("            }\n");
        out.push_str(&format!("            {u_name} a = ({u_name}) another;\n"));
        out.push_str("            if (variant == a.variant) {\n");
        out.push_str("                switch (variant) {\n");
        for v in &self.def.variants {
            out.push_str(&format!("                case {v}:\n"));
            out.push_str(&format!("                    return {v}.equals(a.{v});\n"));
        }
        out.push_str("                }\n");
        out.push_str("            }\n");
        out.push_str("        }\n");
        out.push_str("        return false;\n");
        out.push_str("    }\n");
    }

    fn emit_deserializer(
        &self,
        out: &mut String,
        u_name: &str,
        classes: &VariantClasses<'a>,
    ) -> Result<(), CodegenError> {
        out.push_str(&format!(
            "\n    public static class {u_name}JsonDeserializer extends JsonDeserializer<{u_name}> {{\n"
        ));
        out.push_str("        @Override\n");
        out.push_str(&format!(
            "        public {u_name} deserialize(JsonParser jp, DeserializationContext ctxt) throws IOException, JsonProcessingException {{\n"
        ));
        out.push_str("            JsonToken tok = jp.nextToken();\n");
        out.push_str("            if (tok != JsonToken.FIELD_NAME) {\n");
        out.push_str(&format!(
            "                throw new IOException(\"Cannot deserialize {u_name} - no valid variant present\");\n"
        ));
        out.push_str("            }\n");
        out.push_str("            String svariant = jp.getCurrentName();\n");
        out.push_str("            tok = jp.nextToken();\n");
        out.push_str(&format!("            {u_name} t = null;\n"));

        if !classes.numeric.is_empty() {
            out.push_str(
                "            if (tok == JsonToken.VALUE_NUMBER_INT || tok == JsonToken.VALUE_NUMBER_FLOAT) {\n",
            );
            out.push_str("                switch (svariant) {\n");
            for v in &classes.numeric {
                let accessor = match self.variant_type(v)?.as_str() {
                    "Integer" => "Int".to_string(),
                    boxed => boxed.to_string(),
                };
                out.push_str(&format!("                case \"{v}\":\n"));
                out.push_str(&format!(
                    "                    t = new {u_name}(jp.get{accessor}Value());\n"
                ));
                out.push_str("                    break;\n");
            }
            self.emit_bad_variant_default(out, u_name);
            self.emit_scalar_branch_close(out, u_name);
        }
        if !classes.textual.is_empty() {
            out.push_str("            if (tok == JsonToken.VALUE_STRING) {\n");
            out.push_str("                switch (svariant) {\n");
            for v in &classes.textual {
                let v_type = self.variant_type(v)?;
                out.push_str(&format!("                case \"{v}\":\n"));
                if v_type == "String" {
                    out.push_str(&format!(
                        "                    t = new {u_name}(jp.getText());\n"
                    ));
                } else {
                    let qual = match self.namespace.filter(|ns| !ns.is_empty()) {
                        Some(ns) => format!("{ns}."),
                        None => String::new(),
                    };
                    out.push_str(&format!(
                        "                    t = new {u_name}({qual}{v_type}.fromString(jp.getText()));\n"
                    ));
                }
                out.push_str("                    break;\n");
            }
            self.emit_bad_variant_default(out, u_name);
            self.emit_scalar_branch_close(out, u_name);
        }
        if !classes.boolean.is_empty() {
            out.push_str(
                "            if (tok == JsonToken.VALUE_TRUE || tok == JsonToken.VALUE_FALSE) {\n",
            );
            out.push_str("                switch (svariant) {\n");
            for v in &classes.boolean {
                out.push_str(&format!("                case \"{v}\":\n"));
                out.push_str(&format!(
                    "                    t = new {u_name}(jp.getBooleanValue());\n"
                ));
                out.push_str("                    break;\n");
            }
            self.emit_bad_variant_default(out, u_name);
            self.emit_scalar_branch_close(out, u_name);
        }
        if !classes.structured.is_empty() {
            out.push_str("            if (tok == JsonToken.START_OBJECT) {\n");
            out.push_str("                switch (svariant) {\n");
            for v in &classes.structured {
                let v_type = self.variant_type(v)?;
                out.push_str(&format!("                case \"{v}\":\n"));
                out.push_str(&format!(
                    "                    t = new {u_name}(jp.readValueAs({v_type}.class));\n"
                ));
                out.push_str("                    break;\n");
            }
            self.emit_bad_variant_default(out, u_name);
            out.push_str("                if (t != null) {\n");
            out.push_str("                    tok = jp.nextToken();\n");
            out.push_str("                    if (tok == JsonToken.END_OBJECT) {\n");
            out.push_str("                        return t;\n");
            out.push_str("                    }\n");
            out.push_str(&format!(
                "                    throw new IOException(\"Cannot deserialize {u_name} - more than one variant present\");\n"
            ));
            out.push_str("                }\n");
            out.push_str("            }\n");
        }
        out.push_str(&format!(
            "            throw new IOException(\"Cannot deserialize {u_name} - no variant present\");\n"
        ));
        out.push_str("        }\n");
        out.push_str("    }\n");
        Ok(())
    }

    fn emit_bad_variant_default(&self, out: &mut String, u_name: &str) {
        out.push_str("                default:\n");
        out.push_str(&format!(
            "                    throw new IOException(\"Cannot deserialize {u_name} - bad type variant: \" + svariant);\n"
        ));
        out.push_str("                }\n");
    }

    /// Closes a scalar decode branch. The enclosing object must end
    /// immediately after the single variant entry; any further field
    /// would mean two variants were present.
    fn emit_scalar_branch_close(&self, out: &mut String, u_name: &str) {
        out.push_str("                tok = jp.nextToken();\n");
        out.push_str("                if (tok != JsonToken.END_OBJECT) {\n");
        out.push_str(&format!(
            "                    throw new IOException(\"Cannot deserialize {u_name} - more than one variant present\");\n"
        ));
        out.push_str("                }\n");
        out.push_str("                return t;\n");
        out.push_str("            }\n");
    }

    fn emit_constructors(&self, out: &mut String, u_name: &str) -> Result<(), CodegenError> {
        out.push_str(&format!("\n    public {u_name}() {{\n    }}\n"));
        for v in &self.def.variants {
            let v_type = self.variant_type(v)?;
            let v_name = uncapitalize(v);
            out.push_str(&format!("\n    public {u_name}({v_type} {v_name}) {{\n"));
            out.push_str(&format!(
                "        this.variant = {u_name}Variant.{v};\n"
            ));
            out.push_str(&format!("        this.{v} = {v_name};\n"));
            out.push_str("    }\n");
        }
        Ok(())
    }

    /// Slot types are always boxed: only the active variant's slot is
    /// non-null.
    fn variant_type(&self, v: &str) -> Result<String, CodegenError> {
        java_type(self.registry, v, true, None, None)
    }
}
