//! Enum emission.

use crate::format::format_comment;
use crate::java::types::capitalize;
use crate::java::{COMMENT_WIDTH, type_comment};
use rdlgen_schema::EnumTypeDef;

/// Emitter for enum declarations.
pub struct EnumEmitter<'a> {
    def: &'a EnumTypeDef,
}

impl<'a> EnumEmitter<'a> {
    /// Creates a new enum emitter.
    #[must_use]
    pub fn new(def: &'a EnumTypeDef) -> Self {
        Self { def }
    }

    /// Emits the enum declaration with one constant per element and a
    /// `fromString` classmethod that rejects unknown text.
    pub fn emit(&self, out: &mut String) {
        let name = capitalize(&self.def.name);

        out.push_str(&type_comment(&name, self.def.comment.as_deref()));
        out.push_str(&format!("public enum {name} {{\n"));

        let last = self.def.elements.len().saturating_sub(1);
        for (i, elem) in self.def.elements.iter().enumerate() {
            if let Some(comment) = &elem.comment {
                out.push_str(&format_comment(comment, 4, COMMENT_WIDTH));
            }
            let sep = if i == last { ";" } else { "," };
            out.push_str(&format!("    {}{sep}\n", elem.symbol));
        }

        out.push('\n');
        out.push_str(&format!(
            "    public static {name} fromString(String v) {{\n"
        ));
        out.push_str(&format!("        for ({name} e : values()) {{\n"));
        out.push_str("            if (e.toString().equals(v)) {\n");
        out.push_str("                return e;\n");
        out.push_str("            }\n");
        out.push_str("        }\n");
        out.push_str(&format!(
            "        throw new IllegalArgumentException(\"Invalid string representation for {name}: \" + v);\n"
        ));
        out.push_str("    }\n");
        out.push_str("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdlgen_schema::{Schema, TypeDef, parse_schema};

    fn sample_schema() -> Schema {
        let json = r#"{
            "name": "cards",
            "types": [
                {"Enum": {"name": "Suit", "type": "Enum", "comment": "Card suits.", "elements": [
                    {"symbol": "CLUBS"},
                    {"symbol": "DIAMONDS"},
                    {"symbol": "HEARTS", "comment": "Red."},
                    {"symbol": "SPADES"}
                ]}}
            ]
        }"#;
        parse_schema(json).expect("Failed to parse")
    }

    fn emit_first_enum(schema: &Schema) -> String {
        let def = match &schema.types[0] {
            TypeDef::Enum(et) => et,
            other => panic!("expected enum, got {other:?}"),
        };
        let mut out = String::new();
        EnumEmitter::new(def).emit(&mut out);
        out
    }

    #[test]
    fn test_emit_constants_in_order() {
        let schema = sample_schema();
        let out = emit_first_enum(&schema);

        assert!(out.contains("public enum Suit {"));
        assert!(out.contains("    CLUBS,\n"));
        assert!(out.contains("    SPADES;\n"));
        let clubs = out.find("CLUBS").expect("CLUBS");
        let spades = out.find("SPADES").expect("SPADES");
        assert!(clubs < spades);
    }

    #[test]
    fn test_emit_comments() {
        let schema = sample_schema();
        let out = emit_first_enum(&schema);

        assert!(out.starts_with("// Suit - Card suits.\n"));
        assert!(out.contains("    // Red.\n    HEARTS,"));
    }

    #[test]
    fn test_emit_from_string() {
        let schema = sample_schema();
        let out = emit_first_enum(&schema);

        assert!(out.contains("public static Suit fromString(String v) {"));
        assert!(out.contains("for (Suit e : values()) {"));
        assert!(out.contains("if (e.toString().equals(v)) {"));
        assert!(out.contains(
            "throw new IllegalArgumentException(\"Invalid string representation for Suit: \" + v);"
        ));
    }
}
