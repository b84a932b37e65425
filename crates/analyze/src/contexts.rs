//! Context data flow between actions and declared contexts.

use crate::messages;
use std::collections::BTreeSet;
use tick_interchange::{TickAction, TickStory};

#[derive(Clone, Copy)]
enum Flow {
    Input,
    Output,
}

impl Flow {
    fn of(self, action: &TickAction) -> &BTreeSet<String> {
        match self {
            Flow::Input => &action.input_context_names,
            Flow::Output => &action.output_context_names,
        }
    }

    fn opposite(self) -> Flow {
        match self {
            Flow::Input => Flow::Output,
            Flow::Output => Flow::Input,
        }
    }
}

/// Contexts of `flow` on `action` that no other action covers with the
/// opposite flow, as `(context, action)` pairs.
fn unmatched<'a>(
    story: &'a TickStory,
    action: &'a TickAction,
    flow: Flow,
    intent_contexts: &BTreeSet<&str>,
) -> Vec<(&'a str, &'a str)> {
    let others: BTreeSet<&str> = story
        .actions
        .iter()
        .filter(|other| other.name != action.name)
        .flat_map(|other| flow.opposite().of(other).iter())
        .map(String::as_str)
        .collect();

    flow.of(action)
        .iter()
        .map(String::as_str)
        .filter(|context| !others.contains(context) && !intent_contexts.contains(context))
        .map(|context| (context, action.name.as_str()))
        .collect()
}

/// Each input context must be produced by another action, and each output
/// context consumed by another action.
///
/// Contexts set by intent associations count as both produced and consumed.
pub fn validate_input_output_contexts(story: &TickStory) -> BTreeSet<String> {
    let intent_contexts = story.intent_association_contexts();
    let mut errors = BTreeSet::new();

    for action in &story.actions {
        for (context, name) in unmatched(story, action, Flow::Input, &intent_contexts) {
            errors.insert(messages::input_context_not_found(context, name));
        }
        for (context, name) in unmatched(story, action, Flow::Output, &intent_contexts) {
            errors.insert(messages::output_context_not_found(context, name));
        }
    }

    errors
}

/// Each context an action reads or writes must be declared.
pub fn validate_declared_contexts(story: &TickStory) -> BTreeSet<String> {
    let declared = story.context_names();

    story
        .actions
        .iter()
        .flat_map(TickAction::context_names)
        .filter(|context| !declared.contains(context))
        .map(messages::action_context_not_found)
        .collect()
}

/// Each declared context must be read or written somewhere.
pub fn validate_unused_contexts(story: &TickStory) -> BTreeSet<String> {
    let mut used: BTreeSet<&str> = story
        .actions
        .iter()
        .flat_map(TickAction::context_names)
        .collect();
    used.extend(story.intent_association_contexts());

    story
        .context_names()
        .into_iter()
        .filter(|context| !used.contains(context))
        .map(messages::declared_context_unused)
        .collect()
}

/// A context may not share its name with an action handler, whether that is
/// the handler id or the action carrying it.
pub fn validate_names(story: &TickStory) -> BTreeSet<String> {
    let mut handlers = story.action_names();
    handlers.extend(story.handler_ids());

    story
        .context_names()
        .intersection(&handlers)
        .map(|name| messages::handler_context_name_conflict(name))
        .collect()
}
