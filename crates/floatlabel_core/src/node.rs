//! Declarative render tree
//!
//! Widgets describe their output as a tree of [`Node`]s. The host framework
//! maps each node kind to its own view, text, image and text-input
//! primitives and performs layout from the attached [`Style`].

use std::path::PathBuf;

use crate::style::Style;

/// Where an image is loaded from
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageSource {
    /// An asset bundled with the application
    Named(String),
    /// A file on disk
    Path(PathBuf),
    /// A remote or data URI
    Uri(String),
}

impl ImageSource {
    pub fn named(name: impl Into<String>) -> Self {
        ImageSource::Named(name.into())
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        ImageSource::Uri(uri.into())
    }
}

/// Properties of an editable text input node
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TextInputNode {
    /// Text to display (already masked for secure entry)
    pub value: String,
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub max_length: Option<usize>,
    pub multiline: bool,
    pub editable: bool,
    pub secure_text_entry: bool,
    pub focused: bool,
}

/// The kind of primitive a node renders as
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    View,
    Text(String),
    Image(ImageSource),
    TextInput(TextInputNode),
}

/// A node of the render tree
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    style: Style,
    id: Option<&'static str>,
    children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            id: None,
            children: Vec::new(),
        }
    }

    /// A container node
    pub fn view() -> Self {
        Self::new(NodeKind::View)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    pub fn image(source: ImageSource) -> Self {
        Self::new(NodeKind::Image(source))
    }

    pub fn text_input(input: TextInputNode) -> Self {
        Self::new(NodeKind::TextInput(input))
    }

    /// Replace the node's style
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Tag the node with a stable identifier for lookups
    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn get_style(&self) -> &Style {
        &self.style
    }

    pub fn get_id(&self) -> Option<&'static str> {
        self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Text content if this is a text node
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Depth-first search for the first node matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// Find a node by the identifier given with [`Node::id`]
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find(&|node| node.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_depth_first() {
        let tree = Node::view()
            .id("root")
            .child(Node::view().child(Node::text("inner").id("label")))
            .child(Node::text("sibling"));

        let label = tree.find_by_id("label").unwrap();
        assert_eq!(label.text_content(), Some("inner"));
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn test_find_text_input() {
        let tree = Node::view().child(Node::text_input(TextInputNode {
            value: "abc".into(),
            editable: true,
            ..Default::default()
        }));

        let input = tree
            .find(&|n| matches!(n.kind(), NodeKind::TextInput(_)))
            .unwrap();
        match input.kind() {
            NodeKind::TextInput(props) => assert_eq!(props.value, "abc"),
            _ => unreachable!(),
        }
    }
}
