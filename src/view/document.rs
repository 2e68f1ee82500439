/// Handle to a node appended to a [`Region`], used to remove it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u64);

#[derive(Debug, Clone)]
struct Node {
    id: NodeId,
    html: String,
}

/// An element of the host document whose children are HTML fragments.
#[derive(Debug, Clone, Default)]
pub struct Region {
    nodes: Vec<Node>,
    next_id: u64,
}

impl Region {
    /// Appends a fragment and returns a handle to it.
    pub fn append(&mut self, html: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.nodes.push(Node {
            id,
            html: html.into(),
        });
        id
    }

    /// Removes a previously appended fragment. Returns false if it is gone.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.id != id);
        self.nodes.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.html.as_str())
    }

    #[must_use]
    pub fn inner_html(&self) -> String {
        self.children().collect::<Vec<_>>().join("\n")
    }
}

/// The host document: a status header region and a results region.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub loading: Region,
    pub results: Region,
}

#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
