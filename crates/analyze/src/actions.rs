//! Actions against states, handlers and target stories.

use crate::messages;
use crate::registry::{HandlerRegistry, StoryRegistry};
use std::collections::BTreeSet;
use tick_interchange::TickStory;

/// Each action must be a state of the machine.
pub fn validate_actions(story: &TickStory) -> BTreeSet<String> {
    story
        .actions
        .iter()
        .filter(|action| story.state_machine.find(&action.name).is_none())
        .map(|action| messages::action_not_found(&action.name))
        .collect()
}

/// Each state that is not a group must be a declared action.
pub fn validate_states(story: &TickStory) -> BTreeSet<String> {
    let actions = story.action_names();

    story
        .state_machine
        .leaf_state_ids()
        .into_iter()
        .filter(|state| !actions.contains(state.as_str()))
        .map(|state| messages::state_not_found(&state))
        .collect()
}

/// Each handler an action declares must be known to the registry.
pub fn validate_action_handlers(
    story: &TickStory,
    handlers: &dyn HandlerRegistry,
) -> BTreeSet<String> {
    story
        .handler_ids()
        .into_iter()
        .filter(|handler| !handlers.contains(handler))
        .map(messages::action_handler_not_found)
        .collect()
}

/// Each story an action redirects to must exist.
pub fn validate_target_stories(
    story: &TickStory,
    stories: &dyn StoryRegistry,
) -> BTreeSet<String> {
    story
        .actions
        .iter()
        .filter_map(|action| {
            action
                .target_story
                .as_deref()
                .filter(|target| !stories.story_exists(target))
                .map(|target| messages::target_story_not_found(&action.name, target))
        })
        .collect()
}
