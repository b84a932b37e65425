//! Finding messages.
//!
//! Editors display these strings verbatim, so their wording is part of the
//! public contract of this crate.

pub fn intent_not_found(intent: &str) -> String {
    format!("Intent {} not found in StateMachine", intent)
}

pub fn trigger_not_found(trigger: &str) -> String {
    format!("Trigger {} not found in StateMachine", trigger)
}

pub fn transition_not_found(transition: &str) -> String {
    format!("Transition {} not found in TickStory intents", transition)
}

pub fn action_not_found(action: &str) -> String {
    format!("Action {} not found in StateMachine", action)
}

pub fn state_not_found(state: &str) -> String {
    format!("State {} not found in TickStory actions", state)
}

pub fn action_handler_not_found(handler: &str) -> String {
    format!("Action handler {} not found in handlers repository", handler)
}

pub fn target_story_not_found(action: &str, story: &str) -> String {
    format!("Target story {} of action {} not found", story, action)
}

pub fn input_context_not_found(context: &str, action: &str) -> String {
    format!(
        "Input context {} of action {} not found in output contexts of others",
        context, action
    )
}

pub fn output_context_not_found(context: &str, action: &str) -> String {
    format!(
        "Output context {} of action {} not found in input contexts of others",
        context, action
    )
}

pub fn action_context_not_found(context: &str) -> String {
    format!("Action context {} not found in declared contexts", context)
}

pub fn declared_context_unused(context: &str) -> String {
    format!(
        "Declared context {} not used by any action or intent association",
        context
    )
}

pub fn handler_context_name_conflict(name: &str) -> String {
    format!("The same name {} is used for Action handler and context", name)
}

pub fn intent_not_secondary(intent: &str) -> String {
    format!(
        "Intent {} is not secondary, it cannot be associated to contexts",
        intent
    )
}

pub fn intent_association_context_not_found(context: &str) -> String {
    format!(
        "Intent association context {} not found in declared contexts",
        context
    )
}

pub fn intent_association_action_not_found(action: &str) -> String {
    format!(
        "Intent association action {} not found in declared actions",
        action
    )
}

pub fn unknown_answer_action_not_found(action: &str) -> String {
    format!("Unknown answer action {} not found in declared actions", action)
}

pub fn unknown_answer_intent_not_secondary(intent: &str) -> String {
    format!("Unknown answer intent {} not found in secondary intents", intent)
}
