use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
    Literal(char),
    Epsilon,
}

#[derive(Debug)]
struct NfaTransition {
    pub start: usize,
    pub end: usize,
    pub kind: TransitionKind,
}

impl NfaTransition {
    fn matches(&self, c: char) -> bool {
        match self.kind {
            TransitionKind::Literal(literal) => literal == c,
            TransitionKind::Epsilon => false,
        }
    }

    fn is_epsilon(&self) -> bool {
        self.kind == TransitionKind::Epsilon
    }
}

/// Nondeterministic finite automaton over an arena of states. States are
/// plain indices allocated per automaton; transitions store index pairs.
/// Composition merges an operand's transitions under an index offset and
/// re-points the start/accept indices, so no state is ever shared between
/// two automata that are still independent.
#[derive(Debug)]
pub(crate) struct Nfa {
    states_count: usize,
    transitions: Vec<NfaTransition>,
    start_state: usize,
    accept_state: usize,
}

impl Nfa {
    fn new() -> Self {
        Nfa {
            states_count: 2,
            transitions: vec![],
            start_state: 0,
            accept_state: 1,
        }
    }

    fn add_state(&mut self) -> usize {
        let state = self.states_count;
        self.states_count += 1;
        state
    }

    fn add_transition(&mut self, start: usize, end: usize, kind: TransitionKind) {
        self.transitions.push(NfaTransition { start, end, kind });
    }

    // copy the other automaton's transitions in, with its state indices
    // shifted past ours; returns the shift
    fn merge(&mut self, other: &Nfa) -> usize {
        let offset = self.states_count;
        self.states_count += other.states_count;

        for t in &other.transitions {
            self.add_transition(t.start + offset, t.end + offset, t.kind);
        }

        offset
    }

    pub fn from_char(c: char) -> Self {
        let mut nfa = Nfa::new();
        nfa.add_transition(
            nfa.start_state,
            nfa.accept_state,
            TransitionKind::Literal(c),
        );
        nfa
    }

    pub fn concatenate(&mut self, other: &Nfa) {
        let offset = self.merge(other);

        // our accept and the other's start become interior states
        self.add_transition(
            self.accept_state,
            other.start_state + offset,
            TransitionKind::Epsilon,
        );
        self.accept_state = other.accept_state + offset;
    }

    pub fn alternate(&mut self, other: &Nfa) {
        let old_start = self.start_state;
        let old_accept = self.accept_state;
        let offset = self.merge(other);

        let new_start = self.add_state();
        let new_accept = self.add_state();

        self.add_transition(new_start, old_start, TransitionKind::Epsilon);
        self.add_transition(new_start, other.start_state + offset, TransitionKind::Epsilon);
        self.add_transition(old_accept, new_accept, TransitionKind::Epsilon);
        self.add_transition(
            other.accept_state + offset,
            new_accept,
            TransitionKind::Epsilon,
        );

        self.start_state = new_start;
        self.accept_state = new_accept;
    }

    // fresh boundary states around the current ones, so a repetition
    // back-edge never lands on a state a later composition attaches to
    fn wrap_ends(&mut self) {
        let old_start = self.start_state;
        let old_accept = self.accept_state;

        let new_start = self.add_state();
        let new_accept = self.add_state();

        self.add_transition(new_start, old_start, TransitionKind::Epsilon);
        self.add_transition(old_accept, new_accept, TransitionKind::Epsilon);

        self.start_state = new_start;
        self.accept_state = new_accept;
    }

    pub fn one_or_more(&mut self) {
        self.add_transition(self.accept_state, self.start_state, TransitionKind::Epsilon);
    }

    pub fn kleene_star(&mut self) {
        self.one_or_more();
        self.wrap_ends();
        self.add_transition(self.start_state, self.accept_state, TransitionKind::Epsilon);
    }

    pub fn zero_or_one(&mut self) {
        self.wrap_ends();
        self.add_transition(self.start_state, self.accept_state, TransitionKind::Epsilon);
    }

    /// All states reachable from `initial_states` without consuming input.
    /// Idempotent and cycle-safe: the reachable set only grows, so the
    /// epsilon cycles introduced by repetition cannot loop the search.
    fn epsilon_closure(&self, initial_states: &[usize]) -> HashSet<usize> {
        let mut reachable: HashSet<usize> = HashSet::new();
        let mut pending: Vec<usize> = Vec::new();

        for &state in initial_states {
            if reachable.insert(state) {
                pending.push(state);
            }
        }

        while let Some(state) = pending.pop() {
            for t in &self.transitions {
                if t.start == state && t.is_epsilon() && reachable.insert(t.end) {
                    pending.push(t.end);
                }
            }
        }

        reachable
    }

    /// Anchored acceptance: advance the set of reachable states one input
    /// character at a time; accept iff the accept state is reachable once
    /// the whole input is consumed.
    pub fn accepts(&self, s: &str) -> bool {
        let mut current_states = self.epsilon_closure(&[self.start_state]);

        for c in s.chars() {
            let mut after_char = Vec::new();
            for t in &self.transitions {
                if current_states.contains(&t.start) && t.matches(c) {
                    after_char.push(t.end);
                }
            }

            current_states = self.epsilon_closure(&after_char);
            if current_states.is_empty() {
                return false;
            }
        }

        current_states.contains(&self.accept_state)
    }
}
