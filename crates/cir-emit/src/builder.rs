//! A small PlantUML text builder, adapted from the DOT builder pattern:
//! same chainable `&mut Self` shape, `@startuml`/`@enduml` framing instead
//! of `digraph { ... }`.

/// Sanitize a string into a valid PlantUML identifier/alias, matching
/// `DotBuilder`'s `sanitize_id` (non-alphanumeric -> `_`).
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// A builder for `@startuml` / `@enduml`-framed PlantUML text.
pub struct PlantUmlBuilder {
    output: String,
}

impl Default for PlantUmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantUmlBuilder {
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("@startuml\n");
        Self { output }
    }

    /// Append a line verbatim, followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    pub fn note(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.output.push_str("note \"");
        self.output.push_str(text.as_ref());
        self.output.push_str("\" as N1\n");
        self
    }

    pub fn build(mut self) -> String {
        self.output.push_str("@enduml\n");
        self.output
    }
}
