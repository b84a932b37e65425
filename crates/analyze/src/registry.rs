//! Lookups injected into validation.
//!
//! Which handlers exist and which stories exist is decided outside the
//! story being validated. Validators only ask membership questions; they
//! never populate or refresh a registry.

use std::collections::BTreeSet;

/// Membership lookup for action handler identifiers.
pub trait HandlerRegistry: Send + Sync {
    fn contains(&self, handler_id: &str) -> bool;
}

/// Membership lookup for story identifiers, used by action redirections.
pub trait StoryRegistry: Send + Sync {
    fn story_exists(&self, story_id: &str) -> bool;
}

/// Set-backed [`HandlerRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHandlerRegistry {
    handlers: BTreeSet<String>,
}

impl InMemoryHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Returns false if it was already known.
    pub fn register(&mut self, handler_id: impl Into<String>) -> bool {
        self.handlers.insert(handler_id.into())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.handlers.iter().map(String::as_str)
    }
}

impl HandlerRegistry for InMemoryHandlerRegistry {
    fn contains(&self, handler_id: &str) -> bool {
        self.handlers.contains(handler_id)
    }
}

impl<S: Into<String>> FromIterator<S> for InMemoryHandlerRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        InMemoryHandlerRegistry {
            handlers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for InMemoryHandlerRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.handlers.extend(iter.into_iter().map(Into::into));
    }
}

/// Set-backed [`StoryRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStoryRegistry {
    stories: BTreeSet<String>,
}

impl InMemoryStoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a story. Returns false if it was already known.
    pub fn register(&mut self, story_id: impl Into<String>) -> bool {
        self.stories.insert(story_id.into())
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl StoryRegistry for InMemoryStoryRegistry {
    fn story_exists(&self, story_id: &str) -> bool {
        self.stories.contains(story_id)
    }
}

impl<S: Into<String>> FromIterator<S> for InMemoryStoryRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        InMemoryStoryRegistry {
            stories: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for InMemoryStoryRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.stories.extend(iter.into_iter().map(Into::into));
    }
}
