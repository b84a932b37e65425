use std::path::Path;
use std::process;

use tick_core::StateMachine;

use crate::{report_error, OutputFormat};

pub(crate) fn cmd_next(
    file: &Path,
    state: &str,
    intent: &str,
    bare: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let (_, root) = super::load_state_machine(file, bare, output, quiet);

    let machine = match StateMachine::new(root) {
        Ok(m) => m,
        Err(e) => {
            report_error(&format!("invalid state machine: {}", e), output, quiet);
            process::exit(1);
        }
    };

    if machine.get_state(state).is_none() {
        report_error(&format!("unknown state '{}'", state), output, quiet);
        process::exit(1);
    }

    let next = match machine.get_next(state, intent) {
        Some(next) => next,
        None => {
            let msg = format!("no transition '{}' from state '{}'", intent, state);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => println!("{}", next.id),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "from": state, "intent": intent, "to": next.id })
        ),
    }
}
