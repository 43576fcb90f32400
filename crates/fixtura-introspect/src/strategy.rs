use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::IntrospectResult;
use crate::info::ClassAttribute;

/// Getter names recognised by [`DefaultStrategy`].
pub const DEFAULT_GETTER_PATTERN: &str = "^(get|is)";
/// Setter names recognised by [`DefaultStrategy`].
pub const DEFAULT_SETTER_PATTERN: &str = "^set";

static DEFAULT_GETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_GETTER_PATTERN).expect("default getter pattern is valid"));
static DEFAULT_SETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_SETTER_PATTERN).expect("default setter pattern is valid"));

/// The pair of accessor-name matchers a strategy exposes.
#[derive(Debug, Clone, Copy)]
pub struct NamingPolicy<'a> {
    pub getter: &'a Regex,
    pub setter: &'a Regex,
}

/// Policy object that decides how accessors are named and which discovered
/// attributes are kept.
///
/// Implementations are passed per introspection call, so different callers
/// can use different conventions against the same catalog.
pub trait IntrospectionStrategy: Send + Sync {
    /// Matcher for getter method names; the first match is stripped to
    /// recover the attribute name.
    fn getter_pattern(&self) -> &Regex;

    /// Matcher for setter method names.
    fn setter_pattern(&self) -> &Regex;

    /// Final say on whether an attribute that survived exclusion is kept.
    fn approve(&self, _attribute: &ClassAttribute<'_>) -> bool {
        true
    }

    fn naming_policy(&self) -> NamingPolicy<'_> {
        NamingPolicy {
            getter: self.getter_pattern(),
            setter: self.setter_pattern(),
        }
    }
}

/// Conventional `get`/`is` and `set` accessors; approves every attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl IntrospectionStrategy for DefaultStrategy {
    fn getter_pattern(&self) -> &Regex {
        &DEFAULT_GETTER
    }

    fn setter_pattern(&self) -> &Regex {
        &DEFAULT_SETTER
    }
}

/// Which attributes a [`PatternStrategy`] keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approval {
    /// Keep every attribute.
    #[default]
    All,
    /// Keep only attributes that can be written through a setter.
    RequireSetter,
}

impl Approval {
    pub fn approves(self, attribute: &ClassAttribute<'_>) -> bool {
        match self {
            Approval::All => true,
            Approval::RequireSetter => attribute.setter().is_some(),
        }
    }
}

/// Strategy built from arbitrary accessor-name patterns.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    getter: Regex,
    setter: Regex,
    approval: Approval,
}

impl PatternStrategy {
    pub fn new(getter: &str, setter: &str) -> IntrospectResult<Self> {
        Ok(Self {
            getter: Regex::new(getter)?,
            setter: Regex::new(setter)?,
            approval: Approval::All,
        })
    }

    pub fn from_regex(getter: Regex, setter: Regex) -> Self {
        Self {
            getter,
            setter,
            approval: Approval::All,
        }
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.approval = approval;
        self
    }

    pub fn approval(&self) -> Approval {
        self.approval
    }
}

impl Default for PatternStrategy {
    fn default() -> Self {
        Self::from_regex(DEFAULT_GETTER.clone(), DEFAULT_SETTER.clone())
    }
}

impl IntrospectionStrategy for PatternStrategy {
    fn getter_pattern(&self) -> &Regex {
        &self.getter
    }

    fn setter_pattern(&self) -> &Regex {
        &self.setter
    }

    fn approve(&self, attribute: &ClassAttribute<'_>) -> bool {
        self.approval.approves(attribute)
    }
}
