use std::path::PathBuf;

use msgtriage_classify::{ClassifierRules, ObjectRule};

/// Strategy for printing the effective rule tables.
///
/// Output is the rules in evaluation order, so the first-match-wins
/// priority can be read top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct RulesStrategy;

impl super::CommandStrategy for RulesStrategy {
    /// Explicit config file, if any
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, _classifier) = super::load_classifier(input.as_deref())?;
        print!("{}", render_rules(&config.rules));
        Ok(())
    }
}

fn render_rules(rules: &ClassifierRules) -> String {
    let mut lines = vec![
        "=== msgtriage Rules ===".to_string(),
        String::new(),
        format!("Support team: {}", rules.support_team.join(", ")),
        String::new(),
        format!("Actions (default: {}):", rules.default_action),
    ];
    lines.extend(
        rules
            .actions
            .iter()
            .map(|rule| format!("  {} -> {}", rule.keywords.join(" | "), rule.label)),
    );
    lines.push(format!(
        "  override: '{}' -> {} ({:?})",
        rules.action_override.keyword, rules.action_override.action, rules.action_override.order
    ));
    lines.push(String::new());

    lines.push(format!("Objects (default: {}):", rules.no_object));
    lines.push(format!(
        "  support + {} -> {} / {}",
        rules.support_notice.keywords.join(" | "),
        rules.support_notice.action,
        rules.support_notice.object
    ));
    lines.extend(
        rules
            .objects
            .iter()
            .map(|rule| format!("  {}", describe_object_rule(rule))),
    );
    lines.push(String::new());

    lines.push(format!("Cases (default: {}):", rules.default_case));
    lines.push(format!("  support author -> {}", rules.support_case));
    lines.push(format!(
        "  {} -> {}",
        rules.support_notice.action, rules.notification_case
    ));
    lines.extend(
        rules
            .cases
            .iter()
            .map(|rule| format!("  {} -> {}", rule.keywords.join(" | "), rule.label)),
    );
    lines.extend(rules.case_refinements.iter().map(|refinement| {
        format!(
            "  {} with action {} -> {}",
            rules.default_case, refinement.action, refinement.label
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn describe_object_rule(rule: &ObjectRule) -> String {
    match rule {
        ObjectRule::ActionWithEmail { actions, label } => {
            format!("action {} + email -> {label}", actions.join("/"))
        }
        ObjectRule::ActionUnless {
            actions,
            unless,
            label,
        } => format!(
            "action {} without {} -> {label}",
            actions.join("/"),
            unless.join(" | ")
        ),
        ObjectRule::Action { actions, label } => format!("action {} -> {label}", actions.join("/")),
        ObjectRule::Keywords {
            keywords,
            suffixes,
            label,
        } if suffixes.is_empty() => format!("{} -> {label}", keywords.join(" | ")),
        ObjectRule::Keywords {
            keywords,
            suffixes,
            label,
        } => format!(
            "{} | ends with {} -> {label}",
            keywords.join(" | "),
            suffixes.join(" | ")
        ),
        ObjectRule::Digits { min_digits, label } => format!("{min_digits}+ digits -> {label}"),
        ObjectRule::SubjectPhrase {
            connectors,
            stop_words,
            ..
        } => format!(
            "text after {} (except {})",
            connectors.join("/"),
            stop_words.join("/")
        ),
        ObjectRule::ShortContent {
            max_chars,
            separator,
        } => format!("content under {max_chars} chars, before '{separator}'"),
        ObjectRule::SupportFallback { label } => format!("support author -> {label}"),
    }
}
