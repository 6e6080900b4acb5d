//! Block rendering
//!
//! Turns typed block records into Terraform text by substituting
//! `{{ key }}` placeholders in a named template.
//!
//! ## Rules
//!
//! - Every placeholder must name an attribute present in the mapping,
//!   otherwise rendering fails with [`Error::TemplateRender`].
//! - A line that references an [`AttributeValue::Absent`] value is dropped,
//!   which is how optional attributes disappear from the output.
//! - Values are written as HCL literals: strings are quoted and escaped,
//!   raw expressions (resource references) are written verbatim.
//!
//! ## Example
//!
//! ```rust
//! use tfimport_core::render::{Renderer, AttributeValue};
//!
//! let renderer = Renderer::new();
//! let text = renderer
//!     .render_import_binding("dnsimple_zone.example_com", AttributeValue::from("example.com"))
//!     .unwrap();
//! assert_eq!(text, "import {\n  to = dnsimple_zone.example_com\n  id = \"example.com\"\n}\n");
//! ```

pub mod blocks;
pub mod templates;

pub use blocks::{
    Block, ContactBlock, DomainBlock, DomainDelegationBlock, ImportBlock, RegisteredDomainBlock,
    ZoneBlock, ZoneRecordBlock,
};
pub use templates::TemplateStore;

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A single attribute value as it appears in Terraform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Quoted string literal
    Str(String),
    /// Expression written verbatim (references, identifiers)
    Raw(String),
    Bool(bool),
    Int(i64),
    List(Vec<AttributeValue>),
    /// No value; lines referencing it are omitted
    Absent,
}

impl AttributeValue {
    /// Raw expression, written without quoting
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// Optional string; `None` and `""` are both absent
    pub fn optional_str(value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.is_empty() => Self::Str(s.to_string()),
            _ => Self::Absent,
        }
    }

    /// List of string literals
    pub fn str_list<S: AsRef<str>>(items: &[S]) -> Self {
        Self::List(items.iter().map(|s| Self::Str(s.as_ref().to_string())).collect())
    }

    /// HCL text for this value, `None` when absent
    pub fn to_hcl(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(quote(s)),
            Self::Raw(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::List(items) => {
                let rendered: Vec<String> = items.iter().filter_map(Self::to_hcl).collect();
                Some(format!("[{}]", rendered.join(", ")))
            }
            Self::Absent => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        // Provider ids fit comfortably in i64
        Self::Int(value as i64)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Quote a string as an HCL literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // ${ and %{ start template sequences in HCL strings
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Attribute mapping handed to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Get an attribute
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// Fill in defaults for keys the block did not set itself
    pub fn merge_defaults(mut self, defaults: &DefaultAttributes) -> Self {
        for (key, value) in defaults.attributes().values {
            self.values.entry(key).or_insert(value);
        }
        self
    }
}

/// Per-importer attributes merged into every resource-definition block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultAttributes {
    /// Alias of the Terraform provider configuration to bind resources to
    pub provider_alias: Option<String>,
}

impl DefaultAttributes {
    /// Defaults bound to an optional provider alias; an empty alias means none
    pub fn new(provider_alias: Option<String>) -> Self {
        Self {
            provider_alias: provider_alias.filter(|alias| !alias.is_empty()),
        }
    }

    fn attributes(&self) -> Attributes {
        let provider = match &self.provider_alias {
            Some(alias) => AttributeValue::raw(format!("dnsimple.{alias}")),
            None => AttributeValue::Absent,
        };
        Attributes::new().with("provider", provider)
    }
}

/// Renders named templates with attribute mappings
#[derive(Debug, Clone)]
pub struct Renderer {
    store: TemplateStore,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer over the embedded templates
    pub fn new() -> Self {
        Self::with_store(TemplateStore::embedded())
    }

    /// Create a renderer over a custom template store
    pub fn with_store(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Render a named template with the given attributes
    pub fn render(&self, template: &str, attributes: &Attributes) -> Result<String> {
        let body = self.store.get(template)?;
        let mut out = String::with_capacity(body.len());

        for line in body.split_inclusive('\n') {
            if let Some(rendered) = render_line(template, line, attributes)? {
                out.push_str(&rendered);
            }
        }

        Ok(out)
    }

    /// Render a resource-definition block with importer defaults merged in
    pub fn render_block<B: Block>(&self, block: &B, defaults: &DefaultAttributes) -> Result<String> {
        let attributes = block.attributes().merge_defaults(defaults);
        self.render(block.template(), &attributes)
    }

    /// Render an import block binding `reference` to the provider id `id`
    pub fn render_import_binding(
        &self,
        reference: impl Into<String>,
        id: impl Into<AttributeValue>,
    ) -> Result<String> {
        let block = ImportBlock::new(reference, id);
        self.render(block.template(), &block.attributes())
    }
}

/// Substitute one template line; `None` when the line must be omitted
fn render_line(template: &str, line: &str, attributes: &Attributes) -> Result<Option<String>> {
    let mut out = String::with_capacity(line.len());
    let mut omit = false;
    let mut rest = line;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| {
            Error::template_render(
                template,
                format!("unterminated placeholder in line {:?}", line.trim_end()),
            )
        })?;

        let key = after[..end].trim();
        let value = attributes
            .get(key)
            .ok_or_else(|| Error::template_render(template, format!("missing attribute `{key}`")))?;

        match value.to_hcl() {
            Some(text) => out.push_str(&text),
            None => omit = true,
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok((!omit).then_some(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(body: &str) -> Renderer {
        Renderer::with_store(TemplateStore::new().with_template("t", body))
    }

    #[test]
    fn test_substitution_and_quoting() {
        let renderer = store_with("a = {{ a }}\nb = {{b}}\nc = {{ c }}\n");
        let attrs = Attributes::new()
            .with("a", "x\"y")
            .with("b", true)
            .with("c", AttributeValue::raw("dnsimple_zone.z.name"));

        let text = renderer.render("t", &attrs).unwrap();
        assert_eq!(text, "a = \"x\\\"y\"\nb = true\nc = dnsimple_zone.z.name\n");
    }

    #[test]
    fn test_absent_value_drops_line() {
        let renderer = store_with("{\n  fax = {{ fax }}\n  city = {{ city }}\n}\n");
        let attrs = Attributes::new()
            .with("fax", AttributeValue::optional_str(Some("")))
            .with("city", AttributeValue::optional_str(Some("Rome")));

        let text = renderer.render("t", &attrs).unwrap();
        assert_eq!(text, "{\n  city = \"Rome\"\n}\n");
    }

    #[test]
    fn test_missing_attribute_is_render_error() {
        let renderer = store_with("name = {{ name }}\n");
        let err = renderer.render("t", &Attributes::new()).unwrap_err();
        match err {
            Error::TemplateRender { template, message } => {
                assert_eq!(template, "t");
                assert!(message.contains("`name`"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_attribute_detected_on_omitted_line() {
        let renderer = store_with("x = {{ absent }} {{ missing }}\n");
        let attrs = Attributes::new().with("absent", AttributeValue::Absent);
        assert!(renderer.render("t", &attrs).is_err());
    }

    #[test]
    fn test_unterminated_placeholder() {
        let renderer = store_with("name = {{ name\n");
        let attrs = Attributes::new().with("name", "x");
        assert!(matches!(
            renderer.render("t", &attrs),
            Err(Error::TemplateRender { .. })
        ));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = Renderer::new();
        assert!(matches!(
            renderer.render("nope", &Attributes::new()),
            Err(Error::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_hcl_escaping() {
        assert_eq!(quote("v=spf1 -all"), "\"v=spf1 -all\"");
        assert_eq!(quote("a\\b\nc"), "\"a\\\\b\\nc\"");
        assert_eq!(quote("${var} %{if} $5 50%"), "\"$${var} %%{if} $5 50%\"");
    }

    #[test]
    fn test_list_rendering() {
        let value = AttributeValue::str_list(&["ns1.dnsimple.com", "ns2.dnsimple.com"]);
        assert_eq!(
            value.to_hcl().unwrap(),
            "[\"ns1.dnsimple.com\", \"ns2.dnsimple.com\"]"
        );
        assert_eq!(AttributeValue::List(vec![]).to_hcl().unwrap(), "[]");
    }

    #[test]
    fn test_defaults_do_not_override_block_attributes() {
        let defaults = DefaultAttributes::new(Some("prod".to_string()));
        let attrs = Attributes::new()
            .with("provider", AttributeValue::raw("dnsimple.other"))
            .merge_defaults(&defaults);
        assert_eq!(attrs.get("provider"), Some(&AttributeValue::raw("dnsimple.other")));

        let attrs = Attributes::new().merge_defaults(&defaults);
        assert_eq!(attrs.get("provider"), Some(&AttributeValue::raw("dnsimple.prod")));
    }

    #[test]
    fn test_empty_alias_means_no_provider() {
        let defaults = DefaultAttributes::new(Some(String::new()));
        assert_eq!(defaults.provider_alias, None);
        let attrs = Attributes::new().merge_defaults(&defaults);
        assert_eq!(attrs.get("provider"), Some(&AttributeValue::Absent));
    }

    #[test]
    fn test_numeric_import_binding() {
        let renderer = Renderer::new();
        let text = renderer
            .render_import_binding("dnsimple_contact.jane_doe", 42u64)
            .unwrap();
        assert_eq!(text, "import {\n  to = dnsimple_contact.jane_doe\n  id = 42\n}\n");
    }
}
