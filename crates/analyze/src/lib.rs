//! Tick story validation.
//!
//! Each validator is a pure function from a [`TickStory`] (plus injected
//! registries where needed) to the set of messages describing what is
//! inconsistent in it. An empty set means the dimension is valid.
//! [`validate_tick_story`] unions every validator; [`validate_selected`]
//! runs a chosen subset and keeps track of which check produced what.

pub mod actions;
pub mod check;
pub mod contexts;
pub mod intents;
pub mod messages;
pub mod registry;
pub mod report;
pub mod tick_intents;

pub use actions::{
    validate_action_handlers, validate_actions, validate_states, validate_target_stories,
};
pub use check::{Check, UnknownCheck};
pub use contexts::{
    validate_declared_contexts, validate_input_output_contexts, validate_names,
    validate_unused_contexts,
};
pub use intents::{validate_intents, validate_transitions, validate_triggers};
pub use registry::{HandlerRegistry, InMemoryHandlerRegistry, InMemoryStoryRegistry, StoryRegistry};
pub use report::{Finding, ValidationReport};
pub use tick_intents::{
    validate_tick_intent_association_actions, validate_tick_intent_association_contexts,
    validate_tick_intent_names, validate_unknown_config_actions, validate_unknown_config_intents,
};

use std::collections::BTreeSet;
use tick_interchange::TickStory;

/// Run every check and return the union of their messages.
pub fn validate_tick_story(
    story: &TickStory,
    handlers: &dyn HandlerRegistry,
    stories: &dyn StoryRegistry,
) -> BTreeSet<String> {
    validate_report(story, handlers, stories).errors()
}

/// Run the full suite and keep each finding's check.
pub fn validate_report(
    story: &TickStory,
    handlers: &dyn HandlerRegistry,
    stories: &dyn StoryRegistry,
) -> ValidationReport {
    validate_selected(story, handlers, stories, &Check::ALL)
}

/// Run only the requested checks, each at most once, in suite order.
pub fn validate_selected(
    story: &TickStory,
    handlers: &dyn HandlerRegistry,
    stories: &dyn StoryRegistry,
    checks: &[Check],
) -> ValidationReport {
    let wanted: BTreeSet<Check> = checks.iter().copied().collect();
    let mut report = ValidationReport::new(story.story_id.clone());

    for check in Check::ALL.into_iter().filter(|check| wanted.contains(check)) {
        let messages = check.run(story, handlers, stories);
        tracing::debug!(
            story_id = %story.story_id,
            check = check.name(),
            findings = messages.len(),
            "check run"
        );
        report.record(check, messages);
    }

    if !report.is_valid() {
        tracing::info!(
            story_id = %story.story_id,
            findings = report.findings.len(),
            "story has validation findings"
        );
    }
    report
}
