//! Rule tables driving the classifier.
//!
//! Everything the classifier knows lives here as plain data so that a config
//! file can replace or extend it. Each cascade is an ordered list and the first
//! matching entry wins; order is significant because several keywords are
//! substrings of others.

use serde::{Deserialize, Serialize};

/// A label chosen when the lower-cased content contains any of `keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keywords: Vec<String>,
    pub label: String,
}

impl KeywordRule {
    #[must_use]
    pub fn new(keywords: &[&str], label: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            label: label.to_string(),
        }
    }

    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// When the action override is applied relative to the object cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideOrder {
    /// Object rules see the overridden action. Rules keyed on the table
    /// action (e.g. `Check` → `Samples`) cannot fire for overridden messages.
    #[default]
    BeforeObject,
    /// Object rules see the table action; the override is applied last.
    AfterObject,
}

/// Forces the action whenever `keyword` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOverride {
    pub keyword: String,
    pub action: String,
    #[serde(default)]
    pub order: OverrideOrder,
}

/// Support-team announcements: replaces both action and object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportNotice {
    pub keywords: Vec<String>,
    pub action: String,
    pub object: String,
}

/// One step of the object cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectRule {
    /// Action is one of `actions` and the content holds an email address.
    ActionWithEmail { actions: Vec<String>, label: String },
    /// Action is one of `actions` and none of `unless` occurs in the content.
    ActionUnless {
        actions: Vec<String>,
        unless: Vec<String>,
        label: String,
    },
    /// Action is one of `actions`.
    Action { actions: Vec<String>, label: String },
    /// Content contains any keyword or ends with any suffix.
    Keywords {
        keywords: Vec<String>,
        #[serde(default)]
        suffixes: Vec<String>,
        label: String,
    },
    /// A standalone run of at least `min_digits` digits.
    Digits { min_digits: usize, label: String },
    /// The words after a connector (`for Germany`) become the object.
    SubjectPhrase {
        connectors: Vec<String>,
        terminators: Vec<String>,
        stop_words: Vec<String>,
    },
    /// Short content is its own object, cut at the first `separator`.
    ShortContent { max_chars: usize, separator: String },
    /// Last resort for support-team authors.
    SupportFallback { label: String },
}

/// Case refinement applied when the cascade fell through to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRefinement {
    pub action: String,
    pub label: String,
}

/// Complete classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Exact, case-sensitive usernames of the support team.
    pub support_team: Vec<String>,
    pub actions: Vec<KeywordRule>,
    pub default_action: String,
    pub action_override: ActionOverride,
    pub support_notice: SupportNotice,
    pub objects: Vec<ObjectRule>,
    pub no_object: String,
    pub support_case: String,
    pub notification_case: String,
    pub cases: Vec<KeywordRule>,
    pub default_case: String,
    pub case_refinements: Vec<CaseRefinement>,
}

impl ClassifierRules {
    #[must_use]
    pub fn is_support(&self, author: &str) -> bool {
        self.support_team.iter().any(|member| member == author)
    }

    /// Copy with every keyword lower-cased, matching the lower-cased content.
    #[must_use]
    pub(crate) fn lowercased(&self) -> Self {
        let mut rules = self.clone();
        rules.actions = lower_rules(&self.actions);
        rules.cases = lower_rules(&self.cases);
        rules.action_override.keyword = self.action_override.keyword.to_lowercase();
        rules.support_notice.keywords = lower_all(&self.support_notice.keywords);
        for rule in &mut rules.objects {
            match rule {
                ObjectRule::ActionUnless { unless, .. } => *unless = lower_all(unless),
                ObjectRule::Keywords {
                    keywords, suffixes, ..
                } => {
                    *keywords = lower_all(keywords);
                    *suffixes = lower_all(suffixes);
                }
                ObjectRule::SubjectPhrase { stop_words, .. } => *stop_words = lower_all(stop_words),
                _ => {}
            }
        }
        rules
    }
}

fn lower_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn lower_rules(rules: &[KeywordRule]) -> Vec<KeywordRule> {
    rules
        .iter()
        .map(|r| KeywordRule {
            keywords: lower_all(&r.keywords),
            label: r.label.clone(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Default action table, in priority order.
#[must_use]
pub fn default_actions() -> Vec<KeywordRule> {
    [
        ("add", "Add"),
        ("remove", "Remove"),
        ("delete", "Remove"),
        ("check", "Check"),
        ("test", "Test"),
        ("block", "Block"),
        ("send", "Send"),
        ("ask", "Ask"),
        ("raise", "Raise"),
        ("assign", "Assign"),
        ("share", "Share"),
        ("migration", "Migration"),
        ("give", "Ask"),
        ("whitelist", "Add"),
        ("allow", "Add"),
    ]
    .iter()
    .map(|&(keyword, label)| KeywordRule::new(&[keyword], label))
    .collect()
}

/// Default object cascade (after the support notice rule).
#[must_use]
pub fn default_objects() -> Vec<ObjectRule> {
    vec![
        ObjectRule::ActionWithEmail {
            actions: strings(&["Add"]),
            label: "Email".to_string(),
        },
        ObjectRule::ActionUnless {
            actions: strings(&["Send", "Check"]),
            unless: strings(&["tt", "ticket"]),
            label: "Samples".to_string(),
        },
        ObjectRule::Action {
            actions: strings(&["Assign", "Block"]),
            label: "Carriers".to_string(),
        },
        ObjectRule::Keywords {
            keywords: strings(&[" ss ", "screenshot"]),
            suffixes: strings(&[" ss"]),
            label: "Screenshot".to_string(),
        },
        ObjectRule::Keywords {
            keywords: strings(&["prefix"]),
            suffixes: Vec::new(),
            label: "Prefix".to_string(),
        },
        ObjectRule::Keywords {
            keywords: strings(&["route"]),
            suffixes: Vec::new(),
            label: "Route".to_string(),
        },
        ObjectRule::Keywords {
            keywords: strings(&["rate", "price"]),
            suffixes: Vec::new(),
            label: "Rate".to_string(),
        },
        ObjectRule::Keywords {
            keywords: strings(&["sender", "sid"]),
            suffixes: Vec::new(),
            label: "SenderID".to_string(),
        },
        ObjectRule::Digits {
            min_digits: 7,
            label: "Phone Number".to_string(),
        },
        ObjectRule::SubjectPhrase {
            connectors: strings(&["for", "on", "to", "with", "about"]),
            terminators: strings(&["email", "route", "sim"]),
            stop_words: strings(&["me", "us", "all", "samples"]),
        },
        ObjectRule::ShortContent {
            max_chars: 30,
            separator: "-".to_string(),
        },
        ObjectRule::SupportFallback {
            label: "General Support".to_string(),
        },
    ]
}

/// Default case cascade for messages from outside the support team.
#[must_use]
pub fn default_cases() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(&["fake"], "Fake"),
        KeywordRule::new(&["dlr"], "DLR"),
        KeywordRule::new(&["tt", "ticket"], "Ticket"),
        KeywordRule::new(&["ss7"], "SS7"),
        KeywordRule::new(&["route"], "Route"),
        KeywordRule::new(&["rate", "price", "cost"], "Rate"),
        KeywordRule::new(&["spam", "block"], "Spam/Block"),
        KeywordRule::new(&["sim"], "SIM"),
        KeywordRule::new(&["prefix"], "Prefix"),
        KeywordRule::new(&["sender"], "SenderID"),
        KeywordRule::new(&["balance", "credit", "payment", "paid"], "Finance"),
        KeywordRule::new(
            &["bind", "ip", "whitelist", "connect", "smpp"],
            "Connectivity",
        ),
        KeywordRule::new(&["quality", "fas", "cli", "ncli"], "Quality"),
        KeywordRule::new(&["test"], "Testing"),
    ]
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            support_team: strings(&[
                "peperohka",
                "nihigos",
                "smilekname",
                "marhaba7177",
                "oleg_93830",
            ]),
            actions: default_actions(),
            default_action: "Other".to_string(),
            action_override: ActionOverride {
                keyword: "ss7".to_string(),
                action: "Testing".to_string(),
                order: OverrideOrder::BeforeObject,
            },
            support_notice: SupportNotice {
                keywords: strings(&["maintenance", "notification"]),
                action: "Maintenance Notification".to_string(),
                object: "Ticket".to_string(),
            },
            objects: default_objects(),
            no_object: "N/A".to_string(),
            support_case: "Support".to_string(),
            notification_case: "Notification".to_string(),
            cases: default_cases(),
            default_case: "General Request".to_string(),
            case_refinements: vec![CaseRefinement {
                action: "Check".to_string(),
                label: "Quality Check".to_string(),
            }],
        }
    }
}
