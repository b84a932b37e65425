//! Subcommand implementations.
//!
//! Each command reports failures through [`crate::report_error`] and exits
//! with status 1; on success it returns normally.

pub(crate) mod inspect;
pub(crate) mod lint;
pub(crate) mod next;
pub(crate) mod validate;

use std::path::Path;
use std::process;

use tick_core::State;
use tick_interchange::TickStory;

use crate::{report_error, OutputFormat};

/// Load a story file or exit.
pub(crate) fn load_story(path: &Path, output: OutputFormat, quiet: bool) -> TickStory {
    match tick_interchange::from_path(path) {
        Ok(story) => story,
        Err(e) => {
            let msg = format!("error loading story '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Load the state machine of a story file, or a bare state machine file
/// when `bare` is set. Exits on failure.
pub(crate) fn load_state_machine(
    path: &Path,
    bare: bool,
    output: OutputFormat,
    quiet: bool,
) -> (Option<String>, State) {
    if !bare {
        let story = load_story(path, output, quiet);
        return (Some(story.story_id), story.state_machine);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match serde_json::from_str::<State>(&content) {
        Ok(root) => (None, root),
        Err(e) => {
            let msg = format!("error parsing state machine in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
