//! Markup construction with escaping enforced at render time.
//!
//! Plain text and attribute values are escaped when an element tree is
//! rendered; the only way to emit markup verbatim is through [`RawHtml`],
//! which marks the caller's side of the trust boundary.

/// A block of markup trusted verbatim.
///
/// The catalog's `html` field is the one producer; constructing a value is
/// an explicit assertion that the content comes from the controlled scrape
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHtml(String);

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone)]
pub struct UiElement {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    content: UiContent,
}

#[derive(Debug, Clone)]
enum UiContent {
    Empty,
    Text(String),
    Raw(RawHtml),
    Children(Vec<UiElement>),
}

impl UiElement {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            content: UiContent::Empty,
        }
    }

    pub fn with_attr(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((label, value.into()));
        self
    }

    pub fn maybe_attr(
        mut self,
        condition: bool,
        label: &'static str,
        value: impl Into<String>,
    ) -> Self {
        if condition {
            self.attrs.push((label, value.into()));
        }
        self
    }

    /// Sets plain-text content; escaped on render.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = UiContent::Text(text.into());
        self
    }

    /// Sets trusted markup content; emitted verbatim on render.
    pub fn with_raw(mut self, html: RawHtml) -> Self {
        self.content = UiContent::Raw(html);
        self
    }

    pub fn with_children(mut self, children: Vec<UiElement>) -> Self {
        self.content = UiContent::Children(children);
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (label, value) in &self.attrs {
            out.push(' ');
            out.push_str(label);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        match &self.content {
            UiContent::Empty => {}
            UiContent::Text(text) => out.push_str(&escape_html(text)),
            UiContent::Raw(html) => out.push_str(html.as_str()),
            UiContent::Children(children) => {
                for child in children {
                    child.render_into(out);
                }
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

pub fn el(tag: &'static str) -> UiElement {
    UiElement::new(tag)
}

pub fn text_el(tag: &'static str, text: impl Into<String>) -> UiElement {
    UiElement::new(tag).with_text(text)
}

/// Renders a sequence of sibling elements.
pub fn render_all(elements: &[UiElement]) -> String {
    let mut out = String::new();
    for element in elements {
        element.render_into(&mut out);
    }
    out
}
