/// A value in the markup tree.
///
/// A node only carries a value; its tag name lives next to it in [`Nodes`],
/// so the same node shape can be reused under different names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content. `None` marks the node absent.
    Scalar(Option<String>),
    /// Element with attributes and optional text content.
    Attributed {
        attributes: Vec<(String, Option<String>)>,
        content: Option<String>,
    },
    /// Element holding nested elements.
    Composite(Nodes),
}

impl Node {
    /// Scalar node with a value.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Scalar(Some(value.into()))
    }

    /// Scalar node that is absent when `value` is `None`.
    pub fn optional<S: Into<String>>(value: Option<S>) -> Self {
        Node::Scalar(value.map(Into::into))
    }

    /// Attributed node without content.
    pub fn attributes<K, V, I>(attributes: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, Option<V>)>,
    {
        Node::Attributed {
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.map(Into::into)))
                .collect(),
            content: None,
        }
    }

    /// Sets the text content of an attributed node. Other node shapes are
    /// returned unchanged.
    pub fn with_content(self, value: Option<impl Into<String>>) -> Self {
        match self {
            Node::Attributed { attributes, .. } => Node::Attributed {
                attributes,
                content: value.map(Into::into),
            },
            other => other,
        }
    }

    /// Whether the node writes nothing at all.
    ///
    /// Absence is decided recursively: a composite is absent when every child
    /// is absent.
    pub fn is_absent(&self) -> bool {
        match self {
            Node::Scalar(value) => value.is_none(),
            Node::Attributed {
                attributes,
                content,
            } => {
                content.is_none()
                    && attributes
                        .iter()
                        .all(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            }
            Node::Composite(children) => children.is_absent(),
        }
    }
}

/// Ordered sequence of `(name, node)` pairs.
///
/// Names may repeat; the order of insertion is the order of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes {
    entries: Vec<(String, Node)>,
}

impl Nodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Nodes {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends a pair and returns the sequence, for chaining.
    pub fn node(mut self, name: impl Into<String>, node: Node) -> Self {
        self.push(name, node);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, node: Node) {
        self.entries.push((name.into(), node));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no pair would write any output.
    pub fn is_absent(&self) -> bool {
        self.entries.iter().all(|(_, node)| node.is_absent())
    }
}

impl<N: Into<String>> FromIterator<(N, Node)> for Nodes {
    fn from_iter<T: IntoIterator<Item = (N, Node)>>(iter: T) -> Self {
        Nodes {
            entries: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }
}
