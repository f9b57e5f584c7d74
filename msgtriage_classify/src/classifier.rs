use msgtriage_core::{Classification, Result};
use tracing::debug;

use crate::object::{CompiledObjectRule, Subject};
use crate::rules::{ClassifierRules, OverrideOrder};

/// Assigns action, object and case labels to a message.
///
/// Holds no state besides the rule tables, so `classify` is a pure function
/// of its inputs.
#[derive(Debug)]
pub struct Classifier {
    rules: ClassifierRules,
    objects: Vec<CompiledObjectRule>,
}

impl Classifier {
    /// Create a classifier from rule tables.
    ///
    /// # Errors
    /// Returns an error if an object rule does not compile.
    pub fn new(rules: &ClassifierRules) -> Result<Self> {
        let rules = rules.lowercased();
        let objects = rules
            .objects
            .iter()
            .map(CompiledObjectRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, objects })
    }

    /// Create a classifier with the built-in rule tables.
    ///
    /// # Errors
    /// Returns an error if a default rule does not compile.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ClassifierRules::default())
    }

    #[must_use]
    pub const fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    #[must_use]
    pub fn classify(&self, content: &str, author: &str) -> Classification {
        let lower = content.to_lowercase();
        let is_support = self.rules.is_support(author);
        let order = self.rules.action_override.order;

        let table_action = self.table_action(&lower);
        let overridden = lower.contains(self.rules.action_override.keyword.as_str());

        let mut action = if overridden && order == OverrideOrder::BeforeObject {
            self.rules.action_override.action.clone()
        } else {
            table_action.to_string()
        };

        let notice = &self.rules.support_notice;
        let object = if is_support && notice.keywords.iter().any(|k| lower.contains(k.as_str())) {
            action.clone_from(&notice.action);
            notice.object.clone()
        } else {
            let subject = Subject {
                content,
                lower: &lower,
                action: &action,
                is_support,
            };
            let object = self
                .objects
                .iter()
                .find_map(|rule| rule.apply(&subject))
                .unwrap_or_else(|| self.rules.no_object.clone());
            if overridden && order == OverrideOrder::AfterObject {
                action.clone_from(&self.rules.action_override.action);
            }
            object
        };

        let case = self.case(&lower, &action, is_support);

        debug!(%author, %action, %object, %case, "Classified message");

        Classification {
            action,
            object,
            case,
        }
    }

    fn table_action(&self, lower: &str) -> &str {
        self.rules
            .actions
            .iter()
            .find(|rule| rule.matches(lower))
            .map_or(self.rules.default_action.as_str(), |rule| rule.label.as_str())
    }

    fn case(&self, lower: &str, action: &str, is_support: bool) -> String {
        let rules = &self.rules;
        let is_notice = action == rules.support_notice.action;

        if is_support && !is_notice {
            return rules.support_case.clone();
        }
        if is_notice {
            return rules.notification_case.clone();
        }

        let case = rules
            .cases
            .iter()
            .find(|rule| rule.matches(lower))
            .map_or(rules.default_case.as_str(), |rule| rule.label.as_str());

        if case == rules.default_case {
            if let Some(refined) = rules.case_refinements.iter().find(|r| r.action == action) {
                return refined.label.clone();
            }
        }
        case.to_string()
    }
}
