//! ValidationReport: findings of a validation run, tagged by check.

use crate::check::Check;
use serde::Serialize;
use std::collections::BTreeSet;

/// One validation message and the check that produced it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finding {
    pub check: Check,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub story_id: String,
    pub checks_run: Vec<Check>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(story_id: impl Into<String>) -> Self {
        ValidationReport {
            story_id: story_id.into(),
            checks_run: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Record the result of one check.
    pub fn record(&mut self, check: Check, messages: BTreeSet<String>) {
        self.checks_run.push(check);
        self.findings.extend(
            messages
                .into_iter()
                .map(|message| Finding { check, message }),
        );
    }

    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// All messages, with duplicates across checks collapsed.
    pub fn errors(&self) -> BTreeSet<String> {
        self.findings
            .iter()
            .map(|finding| finding.message.clone())
            .collect()
    }

    /// Findings produced by one check.
    pub fn findings_for(&self, check: Check) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.check == check)
    }
}
