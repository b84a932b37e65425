//! Intents and triggers against state machine transitions.
//!
//! A transition label is either a single intent name or a composite
//! `from-to` label; the two halves of a composite label count as used
//! intents on their own.

use crate::messages;
use std::collections::BTreeSet;
use tick_core::state::split_transition;
use tick_core::State;
use tick_interchange::TickStory;

/// Every name a transition label makes available: whole labels and the
/// halves of composite ones.
fn transition_intents(state_machine: &State) -> BTreeSet<String> {
    let mut intents = state_machine.all_transitions();
    for (from, to) in state_machine.transition_pairs() {
        intents.insert(from);
        intents.insert(to);
    }
    intents
}

/// Each declared intent (main, primary, secondary) must label a transition.
///
/// Intents only handled through unknown-answer configurations never change
/// state and are exempt.
pub fn validate_intents(story: &TickStory) -> BTreeSet<String> {
    let used = transition_intents(&story.state_machine);
    let unknown = story.unknown_intents();

    story
        .all_intents()
        .into_iter()
        .filter(|intent| !unknown.contains(intent))
        .filter(|intent| !used.contains(*intent))
        .map(messages::intent_not_found)
        .collect()
}

/// Each trigger must label a transition.
pub fn validate_triggers(story: &TickStory) -> BTreeSet<String> {
    let used = transition_intents(&story.state_machine);

    story
        .triggers
        .iter()
        .filter(|trigger| !used.contains(*trigger))
        .map(|trigger| messages::trigger_not_found(trigger))
        .collect()
}

/// Each transition label must name a declared intent or trigger, or be a
/// composite of two of them.
pub fn validate_transitions(story: &TickStory) -> BTreeSet<String> {
    let mut declared = story.all_intents();
    declared.extend(story.triggers.iter().map(String::as_str));

    story
        .state_machine
        .all_transitions()
        .into_iter()
        .filter(|label| {
            if declared.contains(label.as_str()) {
                return false;
            }
            match split_transition(label) {
                Some((from, to)) => !(declared.contains(from) && declared.contains(to)),
                None => true,
            }
        })
        .map(|label| messages::transition_not_found(&label))
        .collect()
}
