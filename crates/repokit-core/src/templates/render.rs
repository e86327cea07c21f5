//! `{{ name }}` placeholder substitution

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Variables available to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

/// Render `body`, replacing every placeholder from `context`.
///
/// Unknown variables are an error rather than an empty string. The output
/// always ends with a newline.
pub fn render(name: &str, body: &str, context: &TemplateContext) -> Result<String> {
    if let Some(missing) = PLACEHOLDER
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .find(|var| context.get(var).is_none())
    {
        return Err(Error::Template {
            template: name.to_string(),
            message: format!("undefined variable '{missing}'"),
        });
    }

    let mut rendered = PLACEHOLDER
        .replace_all(body, |caps: &Captures<'_>| {
            context.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned();

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
