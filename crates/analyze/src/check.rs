//! Named validation dimensions.
//!
//! Every validator is reachable through a [`Check`], so callers (and the
//! command line) can run a subset of the suite by name.

use crate::registry::{HandlerRegistry, StoryRegistry};
use crate::{actions, contexts, intents, tick_intents};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tick_interchange::TickStory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Check {
    Intents,
    Triggers,
    Transitions,
    Actions,
    States,
    ActionHandlers,
    TargetStories,
    InputOutputContexts,
    DeclaredContexts,
    UnusedContexts,
    Names,
    TickIntentNames,
    TickIntentAssociationContexts,
    TickIntentAssociationActions,
    UnknownConfigActions,
    UnknownConfigIntents,
}

/// A check name that matches no [`Check`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check '{0}'")]
pub struct UnknownCheck(pub String);

impl Check {
    /// The full suite, in run order.
    pub const ALL: [Check; 16] = [
        Check::Intents,
        Check::Triggers,
        Check::Transitions,
        Check::Actions,
        Check::States,
        Check::ActionHandlers,
        Check::TargetStories,
        Check::InputOutputContexts,
        Check::DeclaredContexts,
        Check::UnusedContexts,
        Check::Names,
        Check::TickIntentNames,
        Check::TickIntentAssociationContexts,
        Check::TickIntentAssociationActions,
        Check::UnknownConfigActions,
        Check::UnknownConfigIntents,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::Intents => "intents",
            Check::Triggers => "triggers",
            Check::Transitions => "transitions",
            Check::Actions => "actions",
            Check::States => "states",
            Check::ActionHandlers => "action-handlers",
            Check::TargetStories => "target-stories",
            Check::InputOutputContexts => "input-output-contexts",
            Check::DeclaredContexts => "declared-contexts",
            Check::UnusedContexts => "unused-contexts",
            Check::Names => "names",
            Check::TickIntentNames => "tick-intent-names",
            Check::TickIntentAssociationContexts => "tick-intent-association-contexts",
            Check::TickIntentAssociationActions => "tick-intent-association-actions",
            Check::UnknownConfigActions => "unknown-config-actions",
            Check::UnknownConfigIntents => "unknown-config-intents",
        }
    }

    /// Run this check against `story`.
    pub fn run(
        self,
        story: &TickStory,
        handlers: &dyn HandlerRegistry,
        stories: &dyn StoryRegistry,
    ) -> BTreeSet<String> {
        match self {
            Check::Intents => intents::validate_intents(story),
            Check::Triggers => intents::validate_triggers(story),
            Check::Transitions => intents::validate_transitions(story),
            Check::Actions => actions::validate_actions(story),
            Check::States => actions::validate_states(story),
            Check::ActionHandlers => actions::validate_action_handlers(story, handlers),
            Check::TargetStories => actions::validate_target_stories(story, stories),
            Check::InputOutputContexts => contexts::validate_input_output_contexts(story),
            Check::DeclaredContexts => contexts::validate_declared_contexts(story),
            Check::UnusedContexts => contexts::validate_unused_contexts(story),
            Check::Names => contexts::validate_names(story),
            Check::TickIntentNames => tick_intents::validate_tick_intent_names(story),
            Check::TickIntentAssociationContexts => {
                tick_intents::validate_tick_intent_association_contexts(story)
            }
            Check::TickIntentAssociationActions => {
                tick_intents::validate_tick_intent_association_actions(story)
            }
            Check::UnknownConfigActions => tick_intents::validate_unknown_config_actions(story),
            Check::UnknownConfigIntents => tick_intents::validate_unknown_config_intents(story),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Check {
    type Err = UnknownCheck;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Check::ALL
            .into_iter()
            .find(|check| check.name() == wanted)
            .ok_or_else(|| UnknownCheck(s.to_string()))
    }
}
