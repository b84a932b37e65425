use std::path::Path;
use std::process;

use tick_analyze::{Check, InMemoryHandlerRegistry, InMemoryStoryRegistry, ValidationReport};

use crate::config::{load_config, TickConfig};
use crate::{report_error, OutputFormat};

pub(crate) struct ValidateArgs<'a> {
    /// Comma-separated check names from `--check`.
    pub checks: Option<&'a str>,
    pub handlers: Vec<String>,
    pub stories: Vec<String>,
    pub config: Option<&'a Path>,
}

pub(crate) fn cmd_validate(
    story_path: &Path,
    args: ValidateArgs<'_>,
    output: OutputFormat,
    quiet: bool,
) {
    let config = match load_config(args.config) {
        Ok(c) => c,
        Err(e) => {
            report_error(&format!("config error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let checks = match select_checks(args.checks, &config) {
        Ok(checks) => checks,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let mut handlers: InMemoryHandlerRegistry = config.handlers.registered.into_iter().collect();
    handlers.extend(args.handlers);
    let mut stories: InMemoryStoryRegistry = config.stories.known.into_iter().collect();
    stories.extend(args.stories);

    let story = super::load_story(story_path, output, quiet);
    let report = tick_analyze::validate_selected(&story, &handlers, &stories, &checks);

    print_report(&report, output, quiet);
    if !report.is_valid() {
        process::exit(1);
    }
}

/// Checks from the command line, else from the config file, else all.
fn select_checks(flag: Option<&str>, config: &TickConfig) -> Result<Vec<Check>, String> {
    let Some(flag) = flag else {
        return Ok(config
            .validation
            .checks
            .clone()
            .unwrap_or_else(|| Check::ALL.to_vec()));
    };

    flag.split(',')
        .map(str::trim)
        .map(|name| {
            name.parse::<Check>().map_err(|e| {
                let valid: Vec<&str> = Check::ALL.iter().map(|c| c.name()).collect();
                format!("invalid check: {}. Valid: {}", e, valid.join(", "))
            })
        })
        .collect()
}

fn print_report(report: &ValidationReport, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", json);
        }
        OutputFormat::Text => {
            if report.is_valid() {
                println!(
                    "valid: story '{}' passed {} check(s)",
                    report.story_id,
                    report.checks_run.len()
                );
                return;
            }
            println!(
                "invalid: story '{}' has {} finding(s)",
                report.story_id,
                report.findings.len()
            );
            for finding in &report.findings {
                println!("  [{}] {}", finding.check, finding.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_checks_defaults_to_all() {
        let checks = select_checks(None, &TickConfig::default()).unwrap();
        assert_eq!(checks, Check::ALL.to_vec());
    }

    #[test]
    fn test_select_checks_from_config() {
        let mut config = TickConfig::default();
        config.validation.checks = Some(vec![Check::States]);
        assert_eq!(select_checks(None, &config).unwrap(), vec![Check::States]);
    }

    #[test]
    fn test_flag_overrides_config() {
        let mut config = TickConfig::default();
        config.validation.checks = Some(vec![Check::States]);
        let checks = select_checks(Some("intents, names"), &config).unwrap();
        assert_eq!(checks, vec![Check::Intents, Check::Names]);
    }

    #[test]
    fn test_empty_check_name_rejected() {
        for flag in ["", ",", "intents,"] {
            let err = select_checks(Some(flag), &TickConfig::default()).unwrap_err();
            assert!(err.contains("unknown check ''"), "{}: {}", flag, err);
            assert!(err.contains("Valid: "));
        }
    }

    #[test]
    fn test_invalid_check_lists_valid_names() {
        let err = select_checks(Some("intents,s1"), &TickConfig::default()).unwrap_err();
        assert!(err.contains("unknown check 's1'"));
        assert!(err.contains("input-output-contexts"));
    }
}
