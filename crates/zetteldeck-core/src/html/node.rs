//! Output tree
//!
//! The transformer produces a tree of [`Node`]s that the [`HtmlWriter`]
//! turns into text.
//!
//! [`HtmlWriter`]: super::HtmlWriter

/// Node of the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text, escaped on output
    Text(String),
    /// Markup written verbatim
    Raw(String),
    /// `<!-- ... -->`
    Comment(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Node::Raw(s.into())
    }

    /// Element without attributes
    pub fn element(tag: &str, children: Vec<Node>) -> Self {
        Node::Element(Element::new(tag).with_children(children))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An HTML element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an attribute value, or append the attribute
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// Add a class name unless already present
    pub fn add_class(&mut self, class: &str) {
        match self.attr("class") {
            Some(current) if current.split_whitespace().any(|c| c == class) => {}
            Some(current) => {
                let joined = format!("{current} {class}");
                self.set_attr("class", joined);
            }
            None => self.set_attr("class", class),
        }
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.extend(children);
    }
}
