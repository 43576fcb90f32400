use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::ClassInfoBuilder;
use crate::errors::IntrospectResult;
use crate::exclusion::ExclusionSpec;
use crate::strategy::{
    Approval, DEFAULT_GETTER_PATTERN, DEFAULT_SETTER_PATTERN, PatternStrategy,
};

/// Options that control how introspection behaves, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectOptions {
    pub naming: NamingOptions,
    pub exclude: ExcludeOptions,
}

/// Accessor naming conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingOptions {
    pub getter_pattern: String,
    pub setter_pattern: String,
    pub approval: Approval,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            getter_pattern: DEFAULT_GETTER_PATTERN.to_string(),
            setter_pattern: DEFAULT_SETTER_PATTERN.to_string(),
            approval: Approval::All,
        }
    }
}

/// Attribute names and annotation types to leave out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeOptions {
    pub fields: Vec<String>,
    pub annotations: Vec<String>,
}

impl IntrospectOptions {
    pub fn from_toml_str(content: &str) -> IntrospectResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> IntrospectResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Compile the naming options into a strategy.
    pub fn strategy(&self) -> IntrospectResult<PatternStrategy> {
        Ok(
            PatternStrategy::new(&self.naming.getter_pattern, &self.naming.setter_pattern)?
                .with_approval(self.naming.approval),
        )
    }

    pub fn exclusions(&self) -> ExclusionSpec {
        ExclusionSpec {
            fields: self.exclude.fields.iter().cloned().collect(),
            annotations: self.exclude.annotations.iter().cloned().collect(),
        }
    }

    pub fn to_parts(&self) -> IntrospectResult<(PatternStrategy, ExclusionSpec)> {
        Ok((self.strategy()?, self.exclusions()))
    }

    pub fn builder(&self) -> IntrospectResult<ClassInfoBuilder> {
        let (strategy, exclusions) = self.to_parts()?;
        Ok(ClassInfoBuilder::new()
            .with_strategy(strategy)
            .with_exclusions(exclusions))
    }
}
