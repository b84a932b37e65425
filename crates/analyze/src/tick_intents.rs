//! Intent context associations and unknown-answer configurations.

use crate::messages;
use std::collections::BTreeSet;
use tick_interchange::TickStory;

/// Only secondary intents may be associated to contexts.
pub fn validate_tick_intent_names(story: &TickStory) -> BTreeSet<String> {
    story
        .intents_contexts
        .iter()
        .map(|intent| intent.intent_name.as_str())
        .filter(|intent| !story.secondary_intents.contains(*intent))
        .map(messages::intent_not_secondary)
        .collect()
}

pub fn validate_tick_intent_association_contexts(story: &TickStory) -> BTreeSet<String> {
    let declared = story.context_names();

    story
        .intent_association_contexts()
        .into_iter()
        .filter(|context| !declared.contains(context))
        .map(messages::intent_association_context_not_found)
        .collect()
}

pub fn validate_tick_intent_association_actions(story: &TickStory) -> BTreeSet<String> {
    let declared = story.action_names();

    story
        .intent_associations()
        .map(|association| association.action_name.as_str())
        .filter(|action| !declared.contains(action))
        .map(messages::intent_association_action_not_found)
        .collect()
}

/// Unknown answers hang off an action, which must be declared.
pub fn validate_unknown_config_actions(story: &TickStory) -> BTreeSet<String> {
    let declared = story.action_names();

    story
        .unknown_answer_configs
        .iter()
        .map(|config| config.action.as_str())
        .filter(|action| !declared.contains(action))
        .map(messages::unknown_answer_action_not_found)
        .collect()
}

/// Unknown answers are given for secondary intents only.
pub fn validate_unknown_config_intents(story: &TickStory) -> BTreeSet<String> {
    story
        .unknown_intents()
        .into_iter()
        .filter(|intent| !story.secondary_intents.contains(*intent))
        .map(messages::unknown_answer_intent_not_secondary)
        .collect()
}
