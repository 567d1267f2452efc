use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// A node in the parsed DOM tree: either retained text or an element.
///
/// Both variants are reference-counted so the selector map can share
/// element nodes with the tree without copying them.
#[derive(Debug, Clone)]
pub enum DomNode {
    Text(Rc<TextNode>),
    Element(Rc<ElementNode>),
}

/// A retained text node
#[derive(Debug)]
pub struct TextNode {
    /// Trimmed, non-empty text content
    pub text: String,

    /// Visibility inherited from the parent element
    pub is_visible: bool,

    /// Parent element; non-owning, for lookup and debugging only
    pub parent: Weak<ElementNode>,
}

/// An element in the parsed DOM tree
#[derive(Debug)]
pub struct ElementNode {
    /// Lowercase HTML tag name (e.g. "div", "button", "input")
    pub tag_name: String,

    /// Positional XPath from the document root
    pub xpath: String,

    /// Element attributes copied verbatim from the page
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order. Filled after construction so children
    /// can hold a back-reference to this element.
    pub children: RefCell<Vec<DomNode>>,

    /// Whether the element is visible (bounding box + computed style)
    pub is_visible: bool,

    /// Whether the element was classified interactive and received a handle
    pub is_interactive: bool,

    /// True only for the document root
    pub is_top_element: bool,

    /// Shadow root marker; always false in the current extraction
    pub shadow_root: bool,

    /// Numeric handle assigned to interactive, visible elements
    pub highlight_index: Option<u32>,

    /// Parent element; non-owning, for lookup and debugging only
    pub parent: Weak<ElementNode>,
}

impl Default for ElementNode {
    fn default() -> Self {
        Self {
            tag_name: String::new(),
            xpath: String::new(),
            attributes: HashMap::new(),
            children: RefCell::new(Vec::new()),
            is_visible: false,
            is_interactive: false,
            is_top_element: false,
            shadow_root: false,
            highlight_index: None,
            parent: Weak::new(),
        }
    }
}

impl DomNode {
    /// Get the element variant, if this node is one
    pub fn as_element(&self) -> Option<&Rc<ElementNode>> {
        match self {
            DomNode::Element(el) => Some(el),
            DomNode::Text(_) => None,
        }
    }

    /// Get the text variant, if this node is one
    pub fn as_text(&self) -> Option<&Rc<TextNode>> {
        match self {
            DomNode::Text(text) => Some(text),
            DomNode::Element(_) => None,
        }
    }

    /// Whether the node is visible on the page
    pub fn is_visible(&self) -> bool {
        match self {
            DomNode::Text(text) => text.is_visible,
            DomNode::Element(el) => el.is_visible,
        }
    }
}

impl ElementNode {
    /// Get attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// Get the element's id attribute
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Check if the element carries a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class_name))
            .unwrap_or(false)
    }

    /// Check if the element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Borrow the child nodes
    pub fn children(&self) -> Ref<'_, Vec<DomNode>> {
        self.children.borrow()
    }

    /// Get the parent element, if it is still alive
    pub fn parent(&self) -> Option<Rc<ElementNode>> {
        self.parent.upgrade()
    }

    /// Collect all retained text beneath this element, in document order,
    /// joined with single spaces
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, parts: &mut Vec<String>) {
        for child in self.children.borrow().iter() {
            match child {
                DomNode::Text(text) => parts.push(text.text.clone()),
                DomNode::Element(el) => el.collect_text(parts),
            }
        }
    }

    /// Compact one-line representation for logs and agent-facing listings
    pub fn to_simple_string(&self) -> String {
        let mut out = format!("<{}", self.tag_name);

        if let Some(index) = self.highlight_index {
            out.push_str(&format!(" [{}]", index));
        }

        if let Some(id) = self.id() {
            out.push_str(&format!(" id=\"{}\"", id));
        }

        if let Some(class) = self.attr("class") {
            out.push_str(&format!(" class=\"{}\"", class));
        }

        out.push('>');

        let text = self.text_content();
        if !text.is_empty() {
            out.push_str(&text);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str) -> Rc<ElementNode> {
        Rc::new(ElementNode {
            tag_name: tag.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_attr_lookup() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), "submit-btn".to_string());
        attributes.insert("class".to_string(), "btn primary".to_string());

        let el = ElementNode {
            tag_name: "button".to_string(),
            attributes,
            ..Default::default()
        };

        assert_eq!(el.id(), Some("submit-btn"));
        assert_eq!(el.attr("class"), Some("btn primary"));
        assert_eq!(el.attr("href"), None);
    }

    #[test]
    fn test_has_class() {
        let mut attributes = HashMap::new();
        attributes.insert("class".to_string(), "container main active".to_string());

        let el = ElementNode {
            tag_name: "div".to_string(),
            attributes,
            ..Default::default()
        };

        assert!(el.has_class("container"));
        assert!(el.has_class("active"));
        assert!(!el.has_class("hidden"));
    }

    #[test]
    fn test_is_tag_case_insensitive() {
        let el = element("button");
        assert!(el.is_tag("button"));
        assert!(el.is_tag("BUTTON"));
        assert!(!el.is_tag("a"));
    }

    #[test]
    fn test_parent_back_reference() {
        let parent = element("div");
        let child = Rc::new(ElementNode {
            tag_name: "span".to_string(),
            parent: Rc::downgrade(&parent),
            ..Default::default()
        });
        parent
            .children
            .borrow_mut()
            .push(DomNode::Element(child.clone()));

        let resolved = child.parent().expect("parent should be alive");
        assert_eq!(resolved.tag_name, "div");
        assert!(Rc::ptr_eq(&resolved, &parent));
    }

    #[test]
    fn test_text_content_aggregates_descendants() {
        let root = element("div");
        let inner = element("p");
        inner.children.borrow_mut().push(DomNode::Text(Rc::new(TextNode {
            text: "world".to_string(),
            is_visible: true,
            parent: Rc::downgrade(&inner),
        })));
        root.children.borrow_mut().push(DomNode::Text(Rc::new(TextNode {
            text: "hello".to_string(),
            is_visible: true,
            parent: Rc::downgrade(&root),
        })));
        root.children.borrow_mut().push(DomNode::Element(inner));

        assert_eq!(root.text_content(), "hello world");
    }

    #[test]
    fn test_to_simple_string() {
        let mut attributes = HashMap::new();
        attributes.insert("id".to_string(), "go".to_string());

        let el = Rc::new(ElementNode {
            tag_name: "button".to_string(),
            attributes,
            highlight_index: Some(3),
            ..Default::default()
        });
        el.children.borrow_mut().push(DomNode::Text(Rc::new(TextNode {
            text: "Go".to_string(),
            is_visible: true,
            parent: Rc::downgrade(&el),
        })));

        let s = el.to_simple_string();
        assert!(s.contains("<button"));
        assert!(s.contains("[3]"));
        assert!(s.contains("id=\"go\""));
        assert!(s.contains("Go"));
    }
}
