//! DOM-like sink capability
//!
//! An [`Element`] is a container that can have child elements appended and
//! its content replaced. The web handler renders each message as an appended
//! `div` tagged with the level name.

use crate::core::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A child element to be appended to a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogElement {
    pub tag: String,
    pub class_name: String,
    pub inner_html: String,
}

impl LogElement {
    pub fn div(class_name: impl Into<String>, inner_html: impl Into<String>) -> Self {
        Self {
            tag: "div".to_string(),
            class_name: class_name.into(),
            inner_html: inner_html.into(),
        }
    }

    /// Markup for this element, e.g. `<div class="log INFO">hi</div>`
    pub fn outer_html(&self) -> String {
        format!(
            "<{tag} class=\"{class}\">{html}</{tag}>",
            tag = self.tag,
            class = self.class_name,
            html = self.inner_html
        )
    }
}

pub trait Element: Send {
    fn append(&mut self, child: LogElement) -> Result<()>;

    /// Replace the element's whole content
    fn set_inner_html(&mut self, html: &str) -> Result<()>;
}

/// Element shared between a handler's appender and clearer
pub type SharedElement = Arc<Mutex<dyn Element>>;

pub fn shared_element<E: Element + 'static>(element: E) -> SharedElement {
    Arc::new(Mutex::new(element))
}

/// Escape text for insertion as HTML content
///
/// Keeps logged text from being interpreted as markup by the host document.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Default)]
struct MemoryElementState {
    html: String,
    children: Vec<LogElement>,
}

/// In-memory element; clones share the same content
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Arc<Mutex<MemoryElementState>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> Vec<LogElement> {
        self.state.lock().children.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().children.len()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.children.is_empty() && state.html.is_empty()
    }

    /// Current content rendered as markup
    pub fn inner_html(&self) -> String {
        let state = self.state.lock();
        let mut html = state.html.clone();
        for child in &state.children {
            html.push_str(&child.outer_html());
        }
        html
    }
}

impl Element for MemoryElement {
    fn append(&mut self, child: LogElement) -> Result<()> {
        self.state.lock().children.push(child);
        Ok(())
    }

    fn set_inner_html(&mut self, html: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.children.clear();
        state.html = html.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_memory_element_append_and_clear() {
        let element = MemoryElement::new();
        let mut sink = element.clone();

        sink.append(LogElement::div("log INFO", "one")).unwrap();
        sink.append(LogElement::div("log WARN", "two")).unwrap();
        assert_eq!(element.len(), 2);
        assert_eq!(
            element.inner_html(),
            "<div class=\"log INFO\">one</div><div class=\"log WARN\">two</div>"
        );

        sink.set_inner_html("").unwrap();
        assert!(element.is_empty());
    }

    #[test]
    fn test_shared_element() {
        let element = MemoryElement::new();
        let shared = shared_element(element.clone());

        shared.lock().append(LogElement::div("log DEBUG", "x")).unwrap();
        assert_eq!(element.children()[0].class_name, "log DEBUG");
    }
}
