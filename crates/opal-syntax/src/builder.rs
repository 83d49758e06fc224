use crate::node::Node;
use crate::node_kind::NodeKind;
use crate::position::Position;

/// Incremental tree construction over a stack of open nodes.
///
/// The root sits outside the stack: a node closed with nothing beneath it
/// on the stack lands in the root's children. Nodes move into their parent
/// only when closed, so every closed node is final.
pub struct TreeBuilder {
    root: Node,
    open: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            open: vec![],
        }
    }

    /// Pushes a new open node; it becomes the current node.
    pub fn open(&mut self, kind: NodeKind, at: Position) {
        self.open.push(Node::new(kind, at));
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.open.len()
    }

    /// Kind of the current node, `Root` when nothing is open.
    pub fn current_kind(&self) -> NodeKind {
        self.open.last().map_or(NodeKind::Root, |node| node.kind)
    }

    fn current_mut(&mut self) -> &mut Node {
        match self.open.last_mut() {
            Some(node) => node,
            None => &mut self.root,
        }
    }

    /// Appends a text run to the current node, merging it into a trailing
    /// text sibling. Blank runs are dropped.
    pub fn append_text(&mut self, raw: &str, at: Position) {
        let value = normalize(raw);
        if value.is_empty() {
            return;
        }

        let parent = self.current_mut();
        if let Some(last) = parent
            .children
            .last_mut()
            .filter(|last| last.kind.merges_with_sibling())
        {
            last.value.push(' ');
            last.value.push_str(&value);
            return;
        }
        parent.children.push(Node {
            value,
            ..Node::new(NodeKind::Text, at)
        });
    }

    /// Pops the current node onto its parent.
    pub fn close(&mut self) {
        if let Some(node) = self.open.pop() {
            self.current_mut().children.push(node);
        }
    }

    /// Like [`close`](Self::close), but drops a node with no children.
    pub fn close_if_nonempty(&mut self) {
        if self.open.last().is_some_and(|node| node.children.is_empty()) {
            self.open.pop();
        } else {
            self.close();
        }
    }

    /// Re-types the current node once its keyword has resolved.
    pub fn retype(&mut self, kind: NodeKind) {
        self.current_mut().kind = kind;
    }

    pub fn push_attr(&mut self, attr: String) {
        self.current_mut().attrs.push(attr);
    }

    pub fn set_value(&mut self, raw: &str) {
        self.current_mut().value = normalize(raw);
    }

    pub fn set_display_url(&mut self, display_text: String, url: String) {
        let node = self.current_mut();
        node.display_text = display_text;
        node.url = url;
    }

    /// Closes whatever is still open and hands over the root.
    pub fn finish(mut self, errors: Vec<String>) -> Node {
        while !self.open.is_empty() {
            self.close();
        }
        self.root.errors = errors;
        self.root
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Trims `raw` and folds line breaks into spaces.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(['\r', '\n'], " ")
}
