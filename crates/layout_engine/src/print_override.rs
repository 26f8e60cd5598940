//! Print Geometry Override
//!
//! Keeps a single named style block in sync with the print settings so the
//! native print path uses the configured paper size with zero page margins.
//! The block is looked up by a fixed id and created only when missing.

use doc_model::PrintSettings;

/// Id of the style block carrying the `@page` override
pub const PRINT_STYLE_ID: &str = "print-force-style";

/// A style element attached to the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: String,
    pub text: String,
}

impl StyleElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
        }
    }
}

/// Surface that owns style elements (the document head of a webview)
pub trait StyleHost {
    /// Find an attached style element by id
    fn style(&self, id: &str) -> Option<&StyleElement>;

    /// Mutable access to an attached style element
    fn style_mut(&mut self, id: &str) -> Option<&mut StyleElement>;

    /// Attach a new style element
    fn append_style(&mut self, element: StyleElement);
}

/// Style host that keeps elements in memory, in attachment order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStyleHost {
    elements: Vec<StyleElement>,
}

impl InMemoryStyleHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[StyleElement] {
        &self.elements
    }

    /// Number of attached elements with the given id
    pub fn count(&self, id: &str) -> usize {
        self.elements.iter().filter(|el| el.id == id).count()
    }
}

impl StyleHost for InMemoryStyleHost {
    fn style(&self, id: &str) -> Option<&StyleElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn style_mut(&mut self, id: &str) -> Option<&mut StyleElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    fn append_style(&mut self, element: StyleElement) {
        self.elements.push(element);
    }
}

/// CSS forcing the page size and zero margins for print
pub fn print_override_css(settings: &PrintSettings) -> String {
    format!(
        r#"
@page {{
  size: {} {};
  margin: 0 !important;
}}

@media print {{
  body {{
    margin: 0;
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
  }}
}}
"#,
        settings.format, settings.orientation
    )
}

/// Writes the print override into a style host whenever settings change
#[derive(Debug)]
pub struct PrintGeometrySync<H: StyleHost> {
    host: H,
    style_id: String,
}

impl<H: StyleHost> PrintGeometrySync<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            style_id: PRINT_STYLE_ID.to_string(),
        }
    }

    /// Use a different style id
    pub fn with_style_id(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = style_id.into();
        self
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Current override text, if the block has been created
    pub fn current_css(&self) -> Option<&str> {
        self.host.style(&self.style_id).map(|el| el.text.as_str())
    }

    /// Create the style block if absent, then rewrite its content
    pub fn apply(&mut self, settings: &PrintSettings) {
        if self.host.style(&self.style_id).is_none() {
            tracing::debug!("Creating print style block '{}'", self.style_id);
            self.host.append_style(StyleElement::new(self.style_id.clone()));
        }

        let css = print_override_css(settings);
        if let Some(element) = self.host.style_mut(&self.style_id) {
            if element.text != css {
                element.text = css;
                tracing::debug!(
                    "Print geometry set to {} {}",
                    settings.format,
                    settings.orientation
                );
            }
        }
    }
}
