//! The object cascade, compiled from [`ObjectRule`]s.

use std::sync::OnceLock;

use msgtriage_core::{Error, Result};
use regex::Regex;

use crate::rules::ObjectRule;

static EMAIL: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn email() -> &'static Regex {
    EMAIL.get_or_init(|| {
        Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// What an object rule gets to look at.
pub struct Subject<'a> {
    /// Content as extracted.
    pub content: &'a str,
    /// Lower-cased content.
    pub lower: &'a str,
    pub action: &'a str,
    pub is_support: bool,
}

#[derive(Debug)]
pub enum CompiledObjectRule {
    ActionWithEmail {
        actions: Vec<String>,
        label: String,
    },
    ActionUnless {
        actions: Vec<String>,
        unless: Vec<String>,
        label: String,
    },
    Action {
        actions: Vec<String>,
        label: String,
    },
    Keywords {
        keywords: Vec<String>,
        suffixes: Vec<String>,
        label: String,
    },
    Digits {
        pattern: Regex,
        label: String,
    },
    SubjectPhrase {
        pattern: Regex,
        stop_words: Vec<String>,
    },
    ShortContent {
        max_chars: usize,
        separator: String,
    },
    SupportFallback {
        label: String,
    },
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn acts_on(actions: &[String], action: &str) -> bool {
    actions.iter().any(|a| a == action)
}

fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Config(format!("invalid object pattern: {e}")))
}

impl CompiledObjectRule {
    /// Build the matcher for one rule; only regex-backed rules can fail.
    pub fn compile(rule: &ObjectRule) -> Result<Self> {
        Ok(match rule.clone() {
            ObjectRule::ActionWithEmail { actions, label } => Self::ActionWithEmail { actions, label },
            ObjectRule::ActionUnless {
                actions,
                unless,
                label,
            } => Self::ActionUnless {
                actions,
                unless,
                label,
            },
            ObjectRule::Action { actions, label } => Self::Action { actions, label },
            ObjectRule::Keywords {
                keywords,
                suffixes,
                label,
            } => Self::Keywords {
                keywords,
                suffixes,
                label,
            },
            ObjectRule::Digits { min_digits, label } => Self::Digits {
                pattern: compile_regex(&format!(r"\b\d{{{min_digits},}}\b"))?,
                label,
            },
            ObjectRule::SubjectPhrase {
                connectors,
                terminators,
                stop_words,
            } => {
                if connectors.is_empty() {
                    return Err(Error::Config(
                        "subject phrase rule needs at least one connector".to_string(),
                    ));
                }
                let mut ends: Vec<String> = terminators
                    .iter()
                    .map(|t| format!(r"\s+{}", regex::escape(t)))
                    .collect();
                ends.push(r"\n".to_string());
                ends.push("$".to_string());
                let pattern = format!(
                    r"(?i)\b(?:{})\s+([a-zA-Z0-9\s]+?)(?:{})",
                    alternation(&connectors),
                    ends.join("|")
                );
                Self::SubjectPhrase {
                    pattern: compile_regex(&pattern)?,
                    stop_words,
                }
            }
            ObjectRule::ShortContent {
                max_chars,
                separator,
            } => Self::ShortContent {
                max_chars,
                separator,
            },
            ObjectRule::SupportFallback { label } => Self::SupportFallback { label },
        })
    }

    /// The object this rule assigns, or `None` to fall through.
    pub fn apply(&self, subject: &Subject<'_>) -> Option<String> {
        match self {
            Self::ActionWithEmail { actions, label } => {
                (acts_on(actions, subject.action) && email().is_match(subject.content))
                    .then(|| label.clone())
            }
            Self::ActionUnless {
                actions,
                unless,
                label,
            } => (acts_on(actions, subject.action)
                && !unless.iter().any(|u| subject.lower.contains(u.as_str())))
            .then(|| label.clone()),
            Self::Action { actions, label } => {
                acts_on(actions, subject.action).then(|| label.clone())
            }
            Self::Keywords {
                keywords,
                suffixes,
                label,
            } => (keywords.iter().any(|k| subject.lower.contains(k.as_str()))
                || suffixes.iter().any(|s| subject.lower.ends_with(s.as_str())))
            .then(|| label.clone()),
            Self::Digits { pattern, label } => {
                pattern.is_match(subject.content).then(|| label.clone())
            }
            Self::SubjectPhrase {
                pattern,
                stop_words,
            } => {
                let phrase = pattern.captures(subject.content)?.get(1)?.as_str().trim();
                let lower = phrase.to_lowercase();
                if stop_words.iter().any(|w| *w == lower) {
                    None
                } else {
                    Some(phrase.to_string())
                }
            }
            Self::ShortContent {
                max_chars,
                separator,
            } => (subject.content.chars().count() < *max_chars).then(|| {
                subject
                    .content
                    .split(separator.as_str())
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            }),
            Self::SupportFallback { label } => subject.is_support.then(|| label.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::default_objects;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn compiled(index: usize) -> CompiledObjectRule {
        CompiledObjectRule::compile(&default_objects()[index]).expect("default rule compiles")
    }

    fn subject<'a>(content: &'a str, lower: &'a str, action: &'a str) -> Subject<'a> {
        Subject {
            content,
            lower,
            action,
            is_support: false,
        }
    }

    #[test]
    fn test_email_requires_add_action() {
        let rule = compiled(0);
        let content = "pls whitelist ops@carrier.io";
        assert_eq!(
            rule.apply(&subject(content, content, "Add")).as_deref(),
            Some("Email")
        );
        assert_eq!(rule.apply(&subject(content, content, "Remove")), None);
    }

    #[test]
    fn test_samples_excluded_by_ticket_words() {
        let rule = compiled(1);
        assert_eq!(
            rule.apply(&subject("send samples", "send samples", "Send"))
                .as_deref(),
            Some("Samples")
        );
        // "tt" also hides inside words like "attach"
        assert_eq!(
            rule.apply(&subject("send attach", "send attach", "Send")),
            None
        );
    }

    #[test]
    fn test_screenshot_suffix() {
        let rule = compiled(3);
        assert!(rule.apply(&subject("send ss", "send ss", "Other")).is_some());
        assert!(rule.apply(&subject("ss please", "ss please", "Other")).is_none());
        assert!(rule
            .apply(&subject("a ss here", "a ss here", "Other"))
            .is_some());
    }

    #[test]
    fn test_digits_need_full_run() {
        let rule = compiled(8);
        assert!(rule.apply(&subject("call 4915112345678", "", "Other")).is_some());
        assert!(rule.apply(&subject("code 123456", "", "Other")).is_none());
        assert!(rule.apply(&subject("id abc1234567", "", "Other")).is_none());
    }

    #[test]
    fn test_subject_phrase_capture_and_stop_words() {
        let rule = compiled(9);
        let apply = |content: &str| rule.apply(&subject(content, "", "Other"));

        assert_eq!(apply("need rates for Germany").as_deref(), Some("Germany"));
        assert_eq!(apply("issue with Vodafone route").as_deref(), Some("Vodafone"));
        assert_eq!(apply("waiting on Orange sim cards").as_deref(), Some("Orange"));
        assert_eq!(apply("this is for me"), None);
        assert_eq!(apply("ping ABOUT All"), None);
        assert_eq!(apply("nothing here"), None);
    }

    #[test]
    fn test_subject_phrase_stops_at_punctuation() {
        let rule = compiled(9);
        // the capture cannot cross '!' and nothing terminates it before the end
        assert_eq!(rule.apply(&subject("go to France!", "", "Other")), None);
    }

    #[test]
    fn test_short_content_cut_at_hyphen() {
        let rule = compiled(10);
        assert_eq!(
            rule.apply(&subject("Telia - urgent", "", "Other")).as_deref(),
            Some("Telia")
        );
        assert_eq!(
            rule.apply(&subject("-leading", "", "Other")).as_deref(),
            Some("")
        );
        assert_eq!(rule.apply(&subject(&"x".repeat(30), "", "Other")), None);
    }

    #[test]
    fn test_support_fallback_only_for_support() {
        let rule = compiled(11);
        let mut s = subject("hello", "hello", "Other");
        assert_eq!(rule.apply(&s), None);
        s.is_support = true;
        assert_eq!(rule.apply(&s).as_deref(), Some("General Support"));
    }

    #[test]
    fn test_subject_phrase_without_connectors_is_rejected() {
        let rule = ObjectRule::SubjectPhrase {
            connectors: Vec::new(),
            terminators: Vec::new(),
            stop_words: Vec::new(),
        };
        assert!(CompiledObjectRule::compile(&rule).is_err());
    }
}
