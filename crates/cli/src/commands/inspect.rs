use std::path::Path;
use std::process;

use serde::Serialize;
use tick_core::{State, StateMachine};

use crate::{report_error, OutputFormat};

#[derive(Debug, Serialize)]
struct Transition {
    from: String,
    on: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct MachineSummary {
    story_id: Option<String>,
    initial: Option<String>,
    leaves: Vec<String>,
    groups: Vec<String>,
    transitions: Vec<Transition>,
}

fn summarize(story_id: Option<String>, machine: &StateMachine) -> MachineSummary {
    let root = machine.root();
    let mut transitions = Vec::new();
    root.visit(&mut |state: &State| {
        for (on, target) in state.on.iter().flatten() {
            transitions.push(Transition {
                from: state.id.clone(),
                on: on.clone(),
                to: target.trim_start_matches('#').to_string(),
            });
        }
    });

    MachineSummary {
        story_id,
        initial: machine.get_initial(&root.id).map(|state| state.id.clone()),
        leaves: root.leaf_state_ids().into_iter().collect(),
        groups: root.group_state_ids().into_iter().collect(),
        transitions,
    }
}

pub(crate) fn cmd_inspect(file: &Path, bare: bool, output: OutputFormat, quiet: bool) {
    let (story_id, root) = super::load_state_machine(file, bare, output, quiet);

    let machine = match StateMachine::new(root) {
        Ok(m) => m,
        Err(e) => {
            report_error(&format!("invalid state machine: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let summary = summarize(story_id, &machine);
    if quiet {
        return;
    }

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => {
            if let Some(ref id) = summary.story_id {
                println!("Story: {}", id);
            }
            println!(
                "  States: {} ({} leaves, {} groups)",
                summary.leaves.len() + summary.groups.len(),
                summary.leaves.len(),
                summary.groups.len()
            );
            if let Some(ref initial) = summary.initial {
                println!("  Initial: {}", initial);
            }
            println!("  Groups: {}", summary.groups.join(", "));
            println!("  Leaves: {}", summary.leaves.join(", "));
            println!("  Transitions: {}", summary.transitions.len());
            for t in &summary.transitions {
                println!("    {} --[{}]--> {}", t.from, t.on, t.to);
            }
        }
    }
}
