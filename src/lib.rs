#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

use crate::{
    ast::{statements::Statement, tree::TreeNode},
    errors::errors::{LexicalError, SyntaxError},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// The result of running both frontend phases over one source text.
///
/// Statements and diagnostics are independent: a source with errors can
/// still yield trees for the statements that parsed, and a clean source
/// has two empty error lists.
#[derive(Debug)]
pub struct Analysis {
    pub statements: Vec<Statement>,
    pub lexical_errors: Vec<LexicalError>,
    pub syntax_errors: Vec<SyntaxError>,
}

impl Analysis {
    /// True when neither phase reported a diagnostic.
    pub fn is_clean(&self) -> bool {
        self.lexical_errors.is_empty() && self.syntax_errors.is_empty()
    }

    /// Renders every parsed statement under a single `Program` root, or
    /// `None` when nothing parsed.
    pub fn tree(&self) -> Option<TreeNode> {
        if self.statements.is_empty() {
            return None;
        }

        let first = &self.statements[0];
        let children = self.statements.iter().map(Statement::to_tree).collect();
        Some(TreeNode::new("Program", first.line, first.column).with_children(children))
    }
}

/// Runs the full frontend over a source string: tokenize, then parse.
/// Neither phase aborts on bad input, so the analysis always covers the
/// whole source.
pub fn analyze(source: &str) -> Analysis {
    let (tokens, lexical_errors) = tokenize(source);
    let (statements, syntax_errors) = parse(tokens);

    Analysis {
        statements,
        lexical_errors,
        syntax_errors,
    }
}

/// Returns the text of a 1-based source line, for diagnostic rendering.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line.saturating_sub(1) as usize)
}
