//! Checked state machine and navigation.
//!
//! Navigation follows xstate semantics: a transition not declared on the
//! current state is looked up on its ancestors, and entering a group state
//! means entering its initial leaf.

use crate::error::StateMachineError;
use crate::state::State;
use std::collections::BTreeMap;

/// A state tree that passed the integrity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine {
    root: State,
}

impl StateMachine {
    /// Check the tree and wrap it.
    ///
    /// Rejects duplicate ids, self-loops and groups without a valid initial
    /// child, in that order.
    pub fn new(root: State) -> Result<Self, StateMachineError> {
        let duplicates = duplicate_states(&root);
        if !duplicates.is_empty() {
            tracing::error!(states = ?duplicates, "duplicate states detected");
            return Err(StateMachineError::DuplicateStates(duplicates));
        }

        let loops = self_loops(&root);
        if !loops.is_empty() {
            tracing::error!(states = ?loops, "self-loops detected");
            return Err(StateMachineError::SelfLoops(loops));
        }

        let missing = groups_without_initial(&root);
        if !missing.is_empty() {
            tracing::error!(states = ?missing, "group states without initial detected");
            return Err(StateMachineError::MissingInitial(missing));
        }

        Ok(StateMachine { root })
    }

    pub fn root(&self) -> &State {
        &self.root
    }

    pub fn into_root(self) -> State {
        self.root
    }

    /// The state with the given id.
    pub fn get_state(&self, id: &str) -> Option<&State> {
        self.root.find(id)
    }

    /// The group directly containing the given state.
    pub fn get_parent(&self, id: &str) -> Option<&State> {
        self.root.parent_of(id)
    }

    /// The leaf reached by entering the given state.
    ///
    /// A leaf is its own initial; a group resolves through its `initial`
    /// chain.
    pub fn get_initial(&self, id: &str) -> Option<&State> {
        self.root.find(id).and_then(descend_initial)
    }

    /// The leaf reached from `id` when `transition` fires.
    ///
    /// Returns `None` when neither the state nor any ancestor declares the
    /// transition, or when its target does not exist.
    pub fn get_next(&self, id: &str, transition: &str) -> Option<&State> {
        let mut current = self.root.find(id)?;
        loop {
            if let Some(target) = current.target_of(transition) {
                tracing::debug!(from = %current.id, transition, target, "transition matched");
                return self.root.find(target).and_then(descend_initial);
            }
            current = self.root.parent_of(&current.id)?;
        }
    }

    /// Whether `transition` is declared directly on state `id`.
    pub fn is_direct_transition(&self, id: &str, transition: &str) -> bool {
        self.get_state(id)
            .and_then(|state| state.target_of(transition))
            .is_some()
    }

    pub fn contains_transition(&self, transition: &str) -> bool {
        self.root.contains_transition(transition)
    }
}

fn descend_initial(state: &State) -> Option<&State> {
    let mut current = state;
    while current.is_group() {
        let initial = current.initial.as_deref()?;
        current = current.children().find(|child| child.id == initial)?;
    }
    Some(current)
}

/// Ids seen more than once among the root id and every child key.
fn duplicate_states(root: &State) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    *counts.entry(root.id.as_str()).or_default() += 1;
    root.visit(&mut |state| {
        if let Some(states) = &state.states {
            for key in states.keys() {
                *counts.entry(key.as_str()).or_default() += 1;
            }
        }
    });

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

fn self_loops(root: &State) -> Vec<String> {
    let mut loops = Vec::new();
    root.visit(&mut |state| {
        let loops_back = state.on.as_ref().is_some_and(|on| {
            on.values()
                .any(|target| target.strip_prefix('#').unwrap_or(target) == state.id)
        });
        if loops_back {
            loops.push(state.id.clone());
        }
    });
    loops
}

fn groups_without_initial(root: &State) -> Vec<String> {
    let mut missing = Vec::new();
    root.visit(&mut |state| {
        if !state.is_group() {
            return;
        }
        let valid = state
            .initial
            .as_deref()
            .is_some_and(|initial| state.children().any(|child| child.id == initial));
        if !valid {
            missing.push(state.id.clone());
        }
    });
    missing
}
