//! Backend-specific operation compilers. Each backend implements
//! `OperationCompiler` independently; the engine never touches these.

pub mod cypher;

pub use cypher::CypherCompiler;
