//! State tree nodes and read-only queries.
//!
//! The queries here never require the tree to be well formed: validation
//! runs them on whatever the editor produced, and reports the mismatches
//! instead of rejecting the tree.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Separator between the two intent names of a composite transition label.
pub const TRANSITION_SEPARATOR: char = '-';

/// A node of the xstate-style state tree.
///
/// `on` maps a transition name to a target reference of the form `#<state id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct State {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<BTreeMap<String, State>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<BTreeMap<String, String>>,
}

impl State {
    /// A state with no children and no transitions.
    pub fn leaf(id: impl Into<String>) -> Self {
        State {
            id: id.into(),
            initial: None,
            states: None,
            on: None,
        }
    }

    /// Direct children, in key order.
    pub fn children(&self) -> impl Iterator<Item = &State> {
        self.states.iter().flat_map(|states| states.values())
    }

    /// A group state has at least one child.
    pub fn is_group(&self) -> bool {
        self.states.as_ref().is_some_and(|states| !states.is_empty())
    }

    /// Depth-first lookup of a state by id, starting with this node.
    pub fn find(&self, id: &str) -> Option<&State> {
        if self.id == id {
            return Some(self);
        }
        self.children().find_map(|child| child.find(id))
    }

    /// The state whose direct children include `id`.
    pub fn parent_of(&self, id: &str) -> Option<&State> {
        if self.children().any(|child| child.id == id) {
            return Some(self);
        }
        self.children().find_map(|child| child.parent_of(id))
    }

    /// Target state id of a transition declared directly on this state.
    pub fn target_of(&self, transition: &str) -> Option<&str> {
        self.on
            .as_ref()
            .and_then(|on| on.get(transition))
            .map(|target| target.strip_prefix('#').unwrap_or(target))
    }

    /// Whether this state or any descendant declares `transition`.
    pub fn contains_transition(&self, transition: &str) -> bool {
        self.on
            .as_ref()
            .is_some_and(|on| on.contains_key(transition))
            || self
                .children()
                .any(|child| child.contains_transition(transition))
    }

    /// Every transition label declared in the tree.
    pub fn all_transitions(&self) -> BTreeSet<String> {
        let mut transitions = BTreeSet::new();
        self.collect_transitions(&mut transitions);
        transitions
    }

    fn collect_transitions(&self, out: &mut BTreeSet<String>) {
        if let Some(on) = &self.on {
            out.extend(on.keys().cloned());
        }
        for child in self.children() {
            child.collect_transitions(out);
        }
    }

    /// Composite transition labels split into `(from, to)` intent names.
    ///
    /// Only labels of the form `from-to` with both halves non-empty appear;
    /// the label is split on its first separator.
    pub fn transition_pairs(&self) -> BTreeSet<(String, String)> {
        self.all_transitions()
            .iter()
            .filter_map(|label| split_transition(label))
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    /// Ids of every state in the tree, this node included.
    pub fn all_state_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        self.visit(&mut |state| {
            ids.insert(state.id.clone());
        });
        ids
    }

    /// Ids of the states that are not groups.
    pub fn leaf_state_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        self.visit(&mut |state| {
            if !state.is_group() {
                ids.insert(state.id.clone());
            }
        });
        ids
    }

    /// Ids of the group states.
    pub fn group_state_ids(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        self.visit(&mut |state| {
            if state.is_group() {
                ids.insert(state.id.clone());
            }
        });
        ids
    }

    /// Pre-order walk over the tree.
    pub fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a State)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

/// Split a composite transition label on its first separator.
pub fn split_transition(label: &str) -> Option<(&str, &str)> {
    label
        .split_once(TRANSITION_SEPARATOR)
        .filter(|(from, to)| !from.is_empty() && !to.is_empty())
}
