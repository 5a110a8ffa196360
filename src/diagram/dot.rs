//! Graphviz DOT export for the containment diagram.

use super::graph::{NodeKind, RenderGraph};

/// Convert a RenderGraph to DOT source.
pub fn to_dot(graph: &RenderGraph) -> String {
    let mut lines = Vec::new();

    lines.push("// Code Structure".to_string());
    lines.push("digraph {".to_string());
    lines.push("    rankdir=LR;".to_string()); // Left to right
    lines.push("    size=\"8,5\";".to_string());
    lines.push("".to_string());

    for node in graph.nodes() {
        lines.push(format!(
            "    \"{}\" [label=\"{}\", shape={}];",
            escape(&node.key),
            escape(&node.label),
            shape(node.kind)
        ));
    }

    lines.push("".to_string());

    for (from, to) in graph.edges() {
        lines.push(format!(
            "    \"{}\" -> \"{}\";",
            escape(&from.key),
            escape(&to.key)
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn shape(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::File => "folder",
        NodeKind::Class => "box",
        NodeKind::Function => "ellipse",
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ccg::CodeContainmentGraph;
    use crate::symbols::FileSymbols;

    #[test]
    fn test_to_dot() {
        let mut ccg = CodeContainmentGraph::new();
        ccg.insert(
            "app/main.py".into(),
            FileSymbols {
                functions: vec!["main".into()],
                classes: vec!["Server".into()],
            },
        );

        let dot = to_dot(&RenderGraph::from_ccg(&ccg));
        assert!(dot.contains("digraph {"));
        assert!(dot.contains("rankdir=LR"));
        assert!(dot.contains("size=\"8,5\""));
        assert!(dot.contains("\"file:app/main.py\" [label=\"app/main.py\", shape=folder];"));
        assert!(dot.contains("\"class:app/main.py:Server\" [label=\"Server\", shape=box];"));
        assert!(dot.contains("\"function:app/main.py:main\" [label=\"main\", shape=ellipse];"));
        assert!(dot.contains("\"file:app/main.py\" -> \"class:app/main.py:Server\";"));
        assert!(dot.contains("\"file:app/main.py\" -> \"function:app/main.py:main\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_quotes_in_paths_escaped() {
        let mut ccg = CodeContainmentGraph::new();
        ccg.insert("we\"ird.py".into(), FileSymbols::default());

        let dot = to_dot(&RenderGraph::from_ccg(&ccg));
        assert!(dot.contains("\"file:we\\\"ird.py\""));
    }
}
