//! Cypher translation of abstract operations, for Bolt-speaking backends.
//!
//! Only the compilation half lives here; executing the compiled statements
//! requires a driver connection and sits behind the `OperationExecutor` seam.

use crate::core::OpType;
use crate::engine::executor::{CompiledOp, OperationCompiler};
use std::collections::HashMap;

pub struct CypherCompiler;

fn node_params(id: &str) -> HashMap<String, String> {
    HashMap::from([("id".to_string(), id.to_string())])
}

fn edge_params(src: &str, dst: &str) -> HashMap<String, String> {
    HashMap::from([
        ("src".to_string(), src.to_string()),
        ("dst".to_string(), dst.to_string()),
    ])
}

impl OperationCompiler for CypherCompiler {
    fn read_nbrs(&self, id: &str) -> CompiledOp {
        CompiledOp {
            op_type: OpType::ReadNbrs,
            text: "MATCH (n:Node {id: $id})-[:REL]->(m) RETURN m.id".to_string(),
            params: node_params(id),
        }
    }

    fn add_node(&self, id: &str) -> CompiledOp {
        CompiledOp {
            op_type: OpType::AddNode,
            text: "CREATE (n:Node {id: $id})".to_string(),
            params: node_params(id),
        }
    }

    fn del_node(&self, id: &str) -> CompiledOp {
        // DETACH DELETE removes the node together with its incident edges.
        CompiledOp {
            op_type: OpType::DelNode,
            text: "MATCH (n:Node {id: $id}) DETACH DELETE n".to_string(),
            params: node_params(id),
        }
    }

    fn add_edge(&self, src: &str, dst: &str) -> CompiledOp {
        CompiledOp {
            op_type: OpType::AddEdge,
            text: "MATCH (s:Node {id: $src}), (t:Node {id: $dst}) MERGE (s)-[:REL]->(t)"
                .to_string(),
            params: edge_params(src, dst),
        }
    }

    fn del_edge(&self, src: &str, dst: &str) -> CompiledOp {
        CompiledOp {
            op_type: OpType::DelEdge,
            text: "MATCH (s:Node {id: $src})-[r:REL]->(t:Node {id: $dst}) DELETE r".to_string(),
            params: edge_params(src, dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AbstractOperation;

    #[test]
    fn test_dispatch_by_op_type() {
        let compiler = CypherCompiler;

        let read = compiler
            .compile(&AbstractOperation::node(OpType::ReadNbrs, "5"))
            .expect("compile read");
        assert!(read.text.starts_with("MATCH"));
        assert_eq!(read.params.get("id").map(String::as_str), Some("5"));

        // Neighbor reads expand directed out-edges only.
        assert!(read.text.contains("-[:REL]->(m)"));

        let add_edge = compiler
            .compile(&AbstractOperation::edge(OpType::AddEdge, "1", "2"))
            .expect("compile add edge");
        assert!(add_edge.text.contains("MERGE"));
        assert_eq!(add_edge.params.get("dst").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_del_node_detaches() {
        let compiler = CypherCompiler;
        let op = compiler.del_node("9");
        assert!(op.text.contains("DETACH DELETE"));
    }
}
