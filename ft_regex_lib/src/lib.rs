use grammar::GrammarParser;
use nfa::Nfa;

mod grammar;
mod nfa;
mod symbol;

pub use grammar::ParseError;

/// A pattern compiled to a nondeterministic finite automaton. Matching is
/// anchored at both ends: the candidate must be consumed in full. One
/// compiled pattern can be matched against any number of candidates.
#[derive(Debug)]
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        let nfa = GrammarParser::parse(pattern)?.to_nfa();

        Ok(Self { nfa })
    }

    pub fn is_exact_match(&self, candidate: &str) -> bool {
        self.nfa.accepts(candidate)
    }
}
