/// Integrity failures detected when building a [`crate::StateMachine`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateMachineError {
    /// The same state id appears more than once in the tree.
    #[error("one or more duplicate states were detected: {}", .0.join(", "))]
    DuplicateStates(Vec<String>),

    /// A state declares a transition targeting itself.
    #[error("one or more self-loops were detected: {}", .0.join(", "))]
    SelfLoops(Vec<String>),

    /// A group state has no `initial`, or its `initial` is not one of its children.
    #[error("group states without a valid initial state: {}", .0.join(", "))]
    MissingInitial(Vec<String>),
}
