//
//  graph.rs
//  repodoc
//

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::ccg::CodeContainmentGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Class,
    Function,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    /// Unique id within the graph. Class and function keys are namespaced
    /// by kind and owning file; a repeated name gets a `#n` suffix.
    pub key: String,
    pub label: String,
    pub kind: NodeKind,
}

impl RenderNode {
    fn file(path: &str) -> Self {
        Self {
            key: format!("file:{path}"),
            label: path.to_string(),
            kind: NodeKind::File,
        }
    }

    /// `occurrence` counts repeats of the same name in one file, from 1.
    fn member(kind: NodeKind, path: &str, name: &str, occurrence: usize) -> Self {
        let prefix = match kind {
            NodeKind::Class => "class",
            _ => "function",
        };
        let key = match occurrence {
            1 => format!("{prefix}:{path}:{name}"),
            n => format!("{prefix}:{path}:{name}#{n}"),
        };
        Self {
            key,
            label: name.to_string(),
            kind,
        }
    }
}

/// Containment graph handed to the rendering backend: file -> class and
/// file -> function edges, one node and one edge per CCG entry.
#[derive(Debug, Clone, Default)]
pub struct RenderGraph {
    graph: DiGraph<RenderNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl RenderGraph {
    pub fn from_ccg(ccg: &CodeContainmentGraph) -> Self {
        let mut render = Self::default();

        for (path, symbols) in &ccg.files {
            let file_idx = render.add_node(RenderNode::file(path));
            render.add_members(file_idx, path, NodeKind::Class, &symbols.classes);
            render.add_members(file_idx, path, NodeKind::Function, &symbols.functions);
        }

        render
    }

    fn add_members(&mut self, file_idx: NodeIndex, path: &str, kind: NodeKind, names: &[String]) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in names {
            let occurrence = seen.entry(name.as_str()).or_insert(0);
            *occurrence += 1;
            let idx = self.add_node(RenderNode::member(kind, path, name, *occurrence));
            self.graph.add_edge(file_idx, idx, ());
        }
    }

    /// Insert a node unless one with the same key exists.
    fn add_node(&mut self, node: RenderNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.key) {
            return idx;
        }
        let key = node.key.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(key, idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges in insertion order as (source, target).
    pub fn edges(&self) -> impl Iterator<Item = (&RenderNode, &RenderNode)> {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    pub fn file_nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.nodes().filter(|n| n.kind == NodeKind::File)
    }

    /// Targets of the edges leaving a file's node, in insertion order.
    pub fn children_of(&self, path: &str) -> Vec<&RenderNode> {
        let Some(&file_idx) = self.index.get(&RenderNode::file(path).key) else {
            return Vec::new();
        };
        self.graph
            .edge_references()
            .filter(|e| e.source() == file_idx)
            .map(|e| &self.graph[e.target()])
            .collect()
    }

    /// Number of edges arriving at a node.
    pub fn incoming(&self, key: &str) -> usize {
        match self.index.get(key) {
            Some(&idx) => self
                .graph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
            None => 0,
        }
    }
}
