/// AST (parse tree) module
/// Contains all definitions related to the parse tree structure
///
/// Submodules:
/// - expressions: expression and condition node definitions
/// - statements: statement node definitions
/// - types: column data type representations
/// - tree: generic labeled-node rendering for external consumers
pub mod expressions;
pub mod statements;
pub mod tree;
pub mod types;
