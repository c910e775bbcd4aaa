// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Turns command-line strings into validated tool commands and upload arguments.

use serde::Deserialize;

use super::REVISION_PLACEHOLDER;
use crate::types::ToolCommand;

pub fn deserialize_command<'de, D>(deserializer: D) -> Result<ToolCommand, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ToolCommand::parse(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_template<'de, D>(deserializer: D) -> Result<ToolCommand, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ToolCommand::parse_template(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if !s.contains(REVISION_PLACEHOLDER) {
        return Err(serde::de::Error::custom(format!(
            "deploy message must contain a `{REVISION_PLACEHOLDER}` placeholder: {s:?}"
        )));
    }
    Ok(s)
}

pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let flag = s.trim();
    if flag.is_empty() {
        return Err(serde::de::Error::custom("deploy flag cannot be empty"));
    }
    Ok(flag.to_string())
}
