//! RULE CHAIN - ordered, named refinements
//!
//! A schema's format and domain checks are an explicit list evaluated in
//! insertion order. Each step carries its rule, its resolved message and a
//! predicate. Two kinds of step exist:
//!
//! - **gates** stop the chain when they fail (a pattern mismatch makes every
//!   later refinement meaningless);
//! - **refinements** always run, so unrelated failures can all be reported.
//!
//! Once a rule has failed, later steps under the same rule are skipped.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{ValidationIssue, ValidationIssues};
use crate::message::Rule;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

struct Step<T: ?Sized> {
    rule: Rule,
    message: String,
    halts: bool,
    params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    predicate: Predicate<T>,
}

// Clone impl - manual because T need not be Clone
impl<T: ?Sized> Clone for Step<T> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule,
            message: self.message.clone(),
            halts: self.halts,
            params: self.params.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// Ordered list of named checks over one value.
///
/// # Examples
///
/// ```
/// use formfield_validator::combinators::RuleChain;
/// use formfield_validator::message::Rule;
///
/// let chain: RuleChain<str> = RuleChain::new()
///     .gate(Rule::Invalid, "Digits only", |s: &str| s.bytes().all(|b| b.is_ascii_digit()))
///     .refine(Rule::Min, "Too short", |s: &str| s.len() >= 3)
///     .refine(Rule::Max, "Too long", |s: &str| s.len() <= 5);
///
/// assert!(chain.check("1234").is_ok());
/// assert_eq!(chain.check("12").unwrap_err().first().code, "min");
/// // The gate halts: no length issue is reported for non-digits.
/// assert_eq!(chain.check("ab").unwrap_err().len(), 1);
/// ```
pub struct RuleChain<T: ?Sized> {
    steps: Vec<Step<T>>,
}

impl<T: ?Sized> RuleChain<T> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn push<F>(mut self, rule: Rule, message: impl Into<String>, halts: bool, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.steps.push(Step {
            rule,
            message: message.into(),
            halts,
            params: Vec::new(),
            predicate: Arc::new(predicate),
        });
        self
    }

    /// Appends a step that stops the chain on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn gate<F>(self, rule: Rule, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push(rule, message, true, predicate)
    }

    /// Appends an independent refinement.
    #[must_use = "builder methods must be chained or built"]
    pub fn refine<F>(self, rule: Rule, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.push(rule, message, false, predicate)
    }

    /// Attaches a parameter to the most recently added step.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        if let Some(step) = self.steps.last_mut() {
            step.params.push((key.into(), value.into()));
        }
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.steps.iter().map(|step| step.rule)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Evaluates every applicable step and returns the issues in order.
    #[must_use]
    pub fn run(&self, value: &T) -> Vec<ValidationIssue> {
        let mut issues: Vec<ValidationIssue> = Vec::new();
        let mut failed: Vec<Rule> = Vec::new();

        for step in &self.steps {
            if failed.contains(&step.rule) {
                continue;
            }
            if (step.predicate)(value) {
                continue;
            }

            let mut issue = ValidationIssue::new(step.rule.as_str(), step.message.clone());
            issue.params.extend(step.params.iter().cloned());
            issues.push(issue);
            failed.push(step.rule);

            if step.halts {
                break;
            }
        }

        issues
    }

    /// Evaluates the chain.
    ///
    /// # Errors
    ///
    /// Returns every issue produced by [`run`](Self::run), if any.
    pub fn check(&self, value: &T) -> Result<(), ValidationIssues> {
        match ValidationIssues::from_vec(self.run(value)) {
            None => Ok(()),
            Some(issues) => Err(issues),
        }
    }
}

impl<T: ?Sized> Default for RuleChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for RuleChain<T> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for RuleChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.steps.iter().map(|step| step.rule.as_str()))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
