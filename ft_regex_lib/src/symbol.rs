use crate::nfa::Nfa;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum SymbolKind {
    Start,
    Expression,
    Statement,
    Term,
    Modifier,
    Item,
    Group,
    Char,
    Terminal,
}

/// One node of a derivation tree: its grammar kind, the contiguous slice
/// of the pattern it covers, and the child symbols it was expanded into.
/// Children cover the parent's text exactly, in order.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct Symbol {
    pub kind: SymbolKind,
    pub text: String,
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, text: String, children: Vec<Symbol>) -> Self {
        Self {
            kind,
            text,
            children,
        }
    }

    // only meaningful on a chain that ends in a single terminal
    fn terminal_text(&self) -> &str {
        match self.kind {
            SymbolKind::Terminal => &self.text,
            _ => self.children[0].terminal_text(),
        }
    }

    /// Thompson construction by structural recursion. Kinds whose
    /// derivation carries no operator pass their child's automaton
    /// through unchanged.
    pub fn to_nfa(&self) -> Nfa {
        match self.kind {
            SymbolKind::Start | SymbolKind::Item => self.children[0].to_nfa(),
            SymbolKind::Expression => match self.children.as_slice() {
                [statement] => statement.to_nfa(),
                [statement, _alter, expression] => {
                    let mut nfa = statement.to_nfa();
                    nfa.alternate(&expression.to_nfa());
                    nfa
                }
                _ => unreachable!("an expression derives one or three symbols"),
            },
            SymbolKind::Statement => match self.children.as_slice() {
                [term] => term.to_nfa(),
                [term, expression] => {
                    let mut nfa = term.to_nfa();
                    nfa.concatenate(&expression.to_nfa());
                    nfa
                }
                _ => unreachable!("a statement derives one or two symbols"),
            },
            SymbolKind::Term => match self.children.as_slice() {
                [item] => item.to_nfa(),
                [item, modifier] => {
                    let mut nfa = item.to_nfa();
                    match modifier.terminal_text() {
                        "+" => nfa.one_or_more(),
                        "*" => nfa.kleene_star(),
                        "?" => nfa.zero_or_one(),
                        other => unreachable!("invalid modifier: {other}"),
                    }
                    nfa
                }
                _ => unreachable!("a term derives one or two symbols"),
            },
            SymbolKind::Group => match self.children.as_slice() {
                [_open, expression, _close] => expression.to_nfa(),
                _ => unreachable!("a group derives a parenthesized expression"),
            },
            SymbolKind::Char => {
                let mut chars = self.terminal_text().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Nfa::from_char(c),
                    _ => unreachable!("a char symbol covers exactly one character"),
                }
            }
            SymbolKind::Modifier | SymbolKind::Terminal => {
                unreachable!("no automaton for symbol kind {:?}", self.kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::GrammarParser;
    use rstest::*;

    fn build(pattern: &str) -> Nfa {
        GrammarParser::parse(pattern).unwrap().to_nfa()
    }

    mod pass_through_kinds {
        use super::*;

        #[rstest]
        #[case("a", "a")]
        #[case("(a)", "a")]
        #[case("((a))", "a")]
        fn wrapping_a_literal_changes_nothing(#[case] pattern: &str, #[case] input: &str) {
            // given
            let nfa = build(pattern);

            // when
            let matched = nfa.accepts(input);

            // then
            assert!(matched);
        }

        #[rstest]
        #[case("(a)", "")]
        #[case("(a)", "aa")]
        #[case("((a))", "(a)")]
        fn wrapping_a_literal_adds_no_language(#[case] pattern: &str, #[case] input: &str) {
            // given
            let nfa = build(pattern);

            // when
            let matched = nfa.accepts(input);

            // then
            assert!(!matched);
        }
    }

    mod operator_dispatch {
        use super::*;

        #[rstest]
        #[case("ab", "ab", true)]
        #[case("ab", "ba", false)]
        #[case("a|b", "b", true)]
        #[case("a|b", "ab", false)]
        #[case("a*", "aaa", true)]
        #[case("a+", "", false)]
        #[case("a?", "", true)]
        #[case("(ab)*", "abab", true)]
        #[case("(ab)*", "aba", false)]
        fn built_automaton_follows_the_tree(
            #[case] pattern: &str,
            #[case] input: &str,
            #[case] expected: bool,
        ) {
            // given
            let nfa = build(pattern);

            // when
            let matched = nfa.accepts(input);

            // then
            assert_eq!(matched, expected);
        }
    }

    mod terminal_lookup {
        use super::*;

        #[test]
        fn modifier_symbols_resolve_to_their_terminal() {
            // given: START -> EXPRESSION -> STATEMENT -> TERM -> [ITEM, MODIFIER]
            let tree = GrammarParser::parse("a+").unwrap();
            let term = &tree.children[0].children[0].children[0];

            // when
            let modifier = &term.children[1];

            // then
            assert_eq!(modifier.kind, SymbolKind::Modifier);
            assert_eq!(modifier.terminal_text(), "+");
        }

        #[test]
        fn char_symbols_resolve_to_their_terminal() {
            // given
            let tree = GrammarParser::parse("x").unwrap();
            let term = &tree.children[0].children[0].children[0];

            // when
            let char_symbol = &term.children[0].children[0];

            // then
            assert_eq!(char_symbol.kind, SymbolKind::Char);
            assert_eq!(char_symbol.terminal_text(), "x");
        }
    }
}
