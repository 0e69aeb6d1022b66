use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use async_trait::async_trait;
use codelet_core::{CodeletError, Message, RunnableConfig};
use codelet_runnables::Runnable;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing variable: {0}")]
    MissingVariable(String),
    #[error("template uses undeclared variable: {0}")]
    UndeclaredVariable(String),
}

impl From<PromptError> for CodeletError {
    fn from(err: PromptError) -> Self {
        CodeletError::Prompt(err.to_string())
    }
}

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid pattern")
    })
}

/// A string template with `{{ name }}` slots, where `name` is an identifier.
///
/// Used as a chain step, the rendered text becomes a single human message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
    partial_variables: HashMap<String, String>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            partial_variables: HashMap::new(),
        }
    }

    /// Build a template and check that every slot it uses is one of `declared`.
    pub fn with_input_variables(
        template: impl Into<String>,
        declared: &[&str],
    ) -> Result<Self, PromptError> {
        let template = Self::new(template);
        if let Some(unknown) = template
            .input_variables()
            .into_iter()
            .find(|name| !declared.contains(&name.as_str()))
        {
            return Err(PromptError::UndeclaredVariable(unknown));
        }
        Ok(template)
    }

    /// Pre-fill a variable. Values passed to `render` take precedence.
    pub fn with_partial(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.partial_variables.insert(key.into(), value.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Variable names the caller still has to supply, sorted and deduplicated.
    pub fn input_variables(&self) -> Vec<String> {
        variable_pattern()
            .captures_iter(&self.template)
            .map(|caps| caps[1].to_string())
            .filter(|name| !self.partial_variables.contains_key(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Fill every slot. Text that is not a well-formed `{{ identifier }}`
    /// slot, such as `{{ a-b }}` or an unclosed `{{`, is copied through as is.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut output = String::with_capacity(self.template.len());
        let mut copied_up_to = 0;

        for caps in variable_pattern().captures_iter(&self.template) {
            let (Some(slot), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = values
                .get(name.as_str())
                .or_else(|| self.partial_variables.get(name.as_str()))
                .ok_or_else(|| PromptError::MissingVariable(name.as_str().to_string()))?;
            output.push_str(&self.template[copied_up_to..slot.start()]);
            output.push_str(value);
            copied_up_to = slot.end();
        }

        output.push_str(&self.template[copied_up_to..]);
        Ok(output)
    }

    /// Render from JSON values. Strings are inserted verbatim, anything else
    /// as its JSON text.
    pub fn format(&self, values: &HashMap<String, Value>) -> Result<String, CodeletError> {
        let string_values: HashMap<String, String> = values
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect();

        Ok(self.render(&string_values)?)
    }
}

#[async_trait]
impl Runnable<HashMap<String, Value>, Vec<Message>> for PromptTemplate {
    async fn invoke(
        &self,
        input: HashMap<String, Value>,
        _config: &RunnableConfig,
    ) -> Result<Vec<Message>, CodeletError> {
        let text = self.format(&input)?;
        Ok(vec![Message::human(text)])
    }
}
