//! AggregatedDocument entity - the consolidated namespace
//!
//! Built once per run from the ordered stripped fragments. Rendering is a
//! pure function of its fields, so equal documents render byte-identically.

/// Prologue, ordered bodies, epilogue and the trailing global binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedDocument {
    prologue: String,
    body: Vec<String>,
    epilogue: String,
    trailing_binding: String,
}

impl AggregatedDocument {
    /// Create an empty document for `namespace`, binding `global_ident` to
    /// `namespace.root_interface`
    pub fn new(namespace: &str, root_interface: &str, global_ident: &str) -> Self {
        Self {
            prologue: format!("namespace {} {{", namespace),
            body: Vec::new(),
            epilogue: "}".to_string(),
            trailing_binding: format!(
                "declare const {}: {}.{};",
                global_ident, namespace, root_interface
            ),
        }
    }

    /// Append a body; blank bodies are skipped
    pub fn push_body(&mut self, body: &str) {
        let trimmed = body.trim();
        if !trimmed.is_empty() {
            self.body.push(trimmed.to_string());
        }
    }

    pub fn prologue(&self) -> &str {
        &self.prologue
    }

    pub fn bodies(&self) -> &[String] {
        &self.body
    }

    pub fn epilogue(&self) -> &str {
        &self.epilogue
    }

    pub fn trailing_binding(&self) -> &str {
        &self.trailing_binding
    }

    /// Render the final text
    ///
    /// Bodies are separated by one blank line. There is no newline after the
    /// trailing binding.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.prologue);
        out.push('\n');
        if !self.body.is_empty() {
            out.push_str(&self.body.join("\n\n"));
            out.push('\n');
        }
        out.push_str(&self.epilogue);
        out.push_str("\n\n");
        out.push_str(&self.trailing_binding);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_document() {
        let doc = AggregatedDocument::new("N", "BL", "n");
        assert_eq!(doc.render(), "namespace N {\n}\n\ndeclare const n: N.BL;");
    }

    #[test]
    fn parts_are_built_from_names() {
        let doc = AggregatedDocument::new("Host", "Platform", "host");
        assert_eq!(doc.prologue(), "namespace Host {");
        assert_eq!(doc.epilogue(), "}");
        assert_eq!(doc.trailing_binding(), "declare const host: Host.Platform;");
        assert!(doc.bodies().is_empty());
    }

    #[test]
    fn render_separates_bodies_with_blank_line() {
        let mut doc = AggregatedDocument::new("N", "BL", "n");
        doc.push_body("interface A {}");
        doc.push_body("interface B {}");
        assert_eq!(
            doc.render(),
            "namespace N {\ninterface A {}\n\ninterface B {}\n}\n\ndeclare const n: N.BL;"
        );
    }

    #[test]
    fn blank_bodies_are_skipped() {
        let mut doc = AggregatedDocument::new("N", "BL", "n");
        doc.push_body("   \n ");
        doc.push_body("type T = 1;");
        assert_eq!(doc.bodies(), &["type T = 1;".to_string()]);
    }
}
