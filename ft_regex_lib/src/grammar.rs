use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use crate::symbol::{Symbol, SymbolKind};

pub(crate) const RESERVED_CHARS: [char; 6] = ['*', '+', '?', '(', ')', '|'];

/// Returned by compilation when the pattern has no derivation under the
/// grammar. No partial tree is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pattern: String,
}

impl ParseError {
    fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid regular expression: {:?}", self.pattern)
    }
}

impl std::error::Error for ParseError {}

/// Half-open range of character positions in the pattern.
type Span = (usize, usize);

pub(crate) struct GrammarParser<'a> {
    chars: &'a [char],
    // spans already proven underivable for a kind; never retried
    failed: HashSet<(SymbolKind, Span)>,
}

impl<'a> GrammarParser<'a> {
    pub fn parse(pattern: &str) -> Result<Symbol, ParseError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut parser = GrammarParser {
            chars: &chars,
            failed: HashSet::new(),
        };

        parser
            .derive(SymbolKind::Start, (0, chars.len()))
            .ok_or_else(|| ParseError::new(pattern))
    }

    /// Depth-first backtracking derivation: the first candidate whose
    /// children all derive becomes the expansion of this symbol.
    fn derive(&mut self, kind: SymbolKind, span: Span) -> Option<Symbol> {
        if kind == SymbolKind::Terminal {
            return Some(Symbol::new(kind, self.text_of(span), Vec::new()));
        }
        if self.failed.contains(&(kind, span)) {
            return None;
        }

        for candidate in self.replacements(kind, span) {
            if let Some(children) = self.derive_children(&candidate) {
                return Some(Symbol::new(kind, self.text_of(span), children));
            }
        }

        self.failed.insert((kind, span));
        None
    }

    fn derive_children(&mut self, candidate: &[(SymbolKind, Span)]) -> Option<Vec<Symbol>> {
        let mut children = Vec::with_capacity(candidate.len());
        for &(kind, span) in candidate {
            children.push(self.derive(kind, span)?);
        }
        Some(children)
    }

    /*
    Pattern grammar, applied to contiguous substrings:

    START       ::= EXPRESSION
    EXPRESSION  ::= STATEMENT | STATEMENT "|" EXPRESSION
    STATEMENT   ::= TERM | TERM EXPRESSION
    TERM        ::= ITEM | ITEM MODIFIER
    MODIFIER    ::= "*" | "+" | "?"
    ITEM        ::= GROUP | CHAR
    GROUP       ::= "(" EXPRESSION ")"
    CHAR        ::= any single character except * + ? ( ) |
    */
    fn replacements(&self, kind: SymbolKind, (lo, hi): Span) -> Vec<Vec<(SymbolKind, Span)>> {
        use SymbolKind::*;

        let mut candidates = Vec::new();

        match kind {
            Start => candidates.push(vec![(Expression, (lo, hi))]),
            Expression => {
                let mut contains_alter = false;
                for i in lo..hi {
                    if self.chars[i] == '|' {
                        contains_alter = true;
                        candidates.push(vec![
                            (Statement, (lo, i)),
                            (Terminal, (i, i + 1)),
                            (Expression, (i + 1, hi)),
                        ]);
                    }
                }
                if !contains_alter {
                    candidates.push(vec![(Statement, (lo, hi))]);
                }
            }
            Statement => {
                candidates.push(vec![(Term, (lo, hi))]);
                for i in lo + 1..hi {
                    candidates.push(vec![(Term, (lo, i)), (Expression, (i, hi))]);
                }
            }
            Term => {
                candidates.push(vec![(Item, (lo, hi))]);
                for i in lo + 1..hi {
                    candidates.push(vec![(Item, (lo, i)), (Modifier, (i, hi))]);
                }
            }
            Modifier => {
                if hi - lo == 1 && matches!(self.chars[lo], '*' | '+' | '?') {
                    candidates.push(vec![(Terminal, (lo, hi))]);
                }
            }
            Item => {
                candidates.push(vec![(Group, (lo, hi))]);
                candidates.push(vec![(Char, (lo, hi))]);
            }
            Group => {
                if hi - lo > 2 && self.chars[lo] == '(' && self.chars[hi - 1] == ')' {
                    candidates.push(vec![
                        (Terminal, (lo, lo + 1)),
                        (Expression, (lo + 1, hi - 1)),
                        (Terminal, (hi - 1, hi)),
                    ]);
                }
            }
            Char => {
                if hi - lo == 1 && !RESERVED_CHARS.contains(&self.chars[lo]) {
                    candidates.push(vec![(Terminal, (lo, hi))]);
                }
            }
            Terminal => unreachable!("terminal symbols do not expand"),
        }

        candidates
    }

    fn text_of(&self, (lo, hi): Span) -> String {
        self.chars[lo..hi].iter().collect()
    }
}
