//! Typed structs for the Tick story document.
//!
//! Collections of names are `BTreeSet`s so that every projection the
//! validators take is already de-duplicated and ordered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tick_core::State;

/// A declarative conversation flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickStory {
    pub story_id: String,
    #[serde(default)]
    pub name: String,
    pub main_intent: String,
    #[serde(default)]
    pub primary_intents: BTreeSet<String>,
    #[serde(default)]
    pub secondary_intents: BTreeSet<String>,
    /// Intents raised by actions rather than by the user.
    #[serde(default)]
    pub triggers: BTreeSet<String>,
    #[serde(default)]
    pub contexts: Vec<TickContext>,
    #[serde(default)]
    pub actions: Vec<TickAction>,
    #[serde(default)]
    pub intents_contexts: Vec<TickIntent>,
    #[serde(default)]
    pub unknown_answer_configs: Vec<TickUnknownAnswerConfig>,
    pub state_machine: State,
}

// ── Contexts ────────────────────────────────────────────────────────

/// A named piece of conversation data, optionally filled from an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickContext {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_role: Option<String>,
}

// ── Actions ─────────────────────────────────────────────────────────

/// A step of the flow: an answer, a handler call, or both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickAction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_id: Option<String>,
    /// Identifier of the business handler to invoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    #[serde(default)]
    pub input_context_names: BTreeSet<String>,
    #[serde(default)]
    pub output_context_names: BTreeSet<String>,
    /// Intent raised once the action has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    /// Story to redirect to once the action has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_story: Option<String>,
    #[serde(default, rename = "final")]
    pub is_final: bool,
}

impl TickAction {
    /// The handler id, if one is set and not blank.
    pub fn handler_id(&self) -> Option<&str> {
        self.handler
            .as_deref()
            .filter(|handler| !handler.trim().is_empty())
    }

    /// Input and output contexts together.
    pub fn context_names(&self) -> BTreeSet<&str> {
        self.input_context_names
            .iter()
            .chain(&self.output_context_names)
            .map(String::as_str)
            .collect()
    }
}

// ── Intent associations ─────────────────────────────────────────────

/// Context associations of one (secondary) intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickIntent {
    pub intent_name: String,
    #[serde(default)]
    pub associations: Vec<TickIntentAssociation>,
}

/// When the intent arrives right after `action_name`, fill `context_names`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickIntentAssociation {
    pub action_name: String,
    #[serde(default)]
    pub context_names: BTreeSet<String>,
}

// ── Unknown answers ─────────────────────────────────────────────────

/// Answer to give when `intent` is detected while `action` was the last one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickUnknownAnswerConfig {
    pub intent: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_id: Option<String>,
}

// ── Projections ─────────────────────────────────────────────────────

impl TickStory {
    /// Main, primary and secondary intents.
    pub fn all_intents(&self) -> BTreeSet<&str> {
        std::iter::once(self.main_intent.as_str())
            .chain(self.primary_intents.iter().map(String::as_str))
            .chain(self.secondary_intents.iter().map(String::as_str))
            .collect()
    }

    /// Intents handled by unknown-answer configurations.
    pub fn unknown_intents(&self) -> BTreeSet<&str> {
        self.unknown_answer_configs
            .iter()
            .map(|config| config.intent.as_str())
            .collect()
    }

    pub fn action_names(&self) -> BTreeSet<&str> {
        self.actions.iter().map(|action| action.name.as_str()).collect()
    }

    pub fn context_names(&self) -> BTreeSet<&str> {
        self.contexts
            .iter()
            .map(|context| context.name.as_str())
            .collect()
    }

    /// Non-blank handler ids referenced by actions.
    pub fn handler_ids(&self) -> BTreeSet<&str> {
        self.actions.iter().filter_map(TickAction::handler_id).collect()
    }

    /// Every association across every intent.
    pub fn intent_associations(&self) -> impl Iterator<Item = &TickIntentAssociation> {
        self.intents_contexts
            .iter()
            .flat_map(|intent| intent.associations.iter())
    }

    /// Contexts referenced by intent associations.
    pub fn intent_association_contexts(&self) -> BTreeSet<&str> {
        self.intent_associations()
            .flat_map(|association| association.context_names.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn action(&self, name: &str) -> Option<&TickAction> {
        self.actions.iter().find(|action| action.name == name)
    }
}
