//! `dotnet nuget push` / `dotnet nuget delete` settings

use super::common::CommonSettings;
use super::option::{CommandOption, CommandSettings, OptionValue};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuGetPushSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub source: Option<String>,
    pub api_key: Option<String>,
    pub symbol_source: Option<String>,
    pub symbol_api_key: Option<String>,
    /// Push timeout in seconds
    pub timeout: Option<u64>,
    pub disable_buffering: bool,
    pub ignore_symbols: bool,
    pub skip_duplicate: bool,
    pub force_english_output: bool,
    pub no_service_endpoint: bool,
    pub interactive: bool,
}

impl NuGetPushSettings {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl CommandSettings for NuGetPushSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        vec![
            CommandOption::text("source", "--source", &self.source),
            CommandOption::secret("api_key", "--api-key", &self.api_key),
            CommandOption::text("symbol_source", "--symbol-source", &self.symbol_source),
            CommandOption::secret("symbol_api_key", "--symbol-api-key", &self.symbol_api_key),
            CommandOption::new("timeout", "--timeout", OptionValue::Number(self.timeout)),
            CommandOption::switch(
                "disable_buffering",
                "--disable-buffering",
                self.disable_buffering,
            ),
            CommandOption::switch("ignore_symbols", "--no-symbols", self.ignore_symbols),
            CommandOption::switch("skip_duplicate", "--skip-duplicate", self.skip_duplicate),
            CommandOption::switch(
                "force_english_output",
                "--force-english-output",
                self.force_english_output,
            ),
            CommandOption::switch(
                "no_service_endpoint",
                "--no-service-endpoint",
                self.no_service_endpoint,
            ),
            CommandOption::switch("interactive", "--interactive", self.interactive),
        ]
    }
}

impl fmt::Debug for NuGetPushSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NuGetPushSettings")
            .field("common", &self.common)
            .field("source", &self.source)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("symbol_source", &self.symbol_source)
            .field(
                "symbol_api_key",
                &self.symbol_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout", &self.timeout)
            .field("disable_buffering", &self.disable_buffering)
            .field("ignore_symbols", &self.ignore_symbols)
            .field("skip_duplicate", &self.skip_duplicate)
            .field("force_english_output", &self.force_english_output)
            .field("no_service_endpoint", &self.no_service_endpoint)
            .field("interactive", &self.interactive)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuGetDeleteSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub source: Option<String>,
    pub api_key: Option<String>,
    /// Skip the confirmation prompt
    pub non_interactive: bool,
    pub force_english_output: bool,
    pub no_service_endpoint: bool,
    pub interactive: bool,
}

impl CommandSettings for NuGetDeleteSettings {
    fn common(&self) -> &CommonSettings {
        &self.common
    }

    fn options(&self) -> Vec<CommandOption<'_>> {
        vec![
            CommandOption::text("source", "--source", &self.source),
            CommandOption::secret("api_key", "--api-key", &self.api_key),
            CommandOption::switch("non_interactive", "--non-interactive", self.non_interactive),
            CommandOption::switch(
                "force_english_output",
                "--force-english-output",
                self.force_english_output,
            ),
            CommandOption::switch(
                "no_service_endpoint",
                "--no-service-endpoint",
                self.no_service_endpoint,
            ),
            CommandOption::switch("interactive", "--interactive", self.interactive),
        ]
    }

    fn interactive_prompt(&self) -> bool {
        !self.non_interactive
    }
}

impl fmt::Debug for NuGetDeleteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NuGetDeleteSettings")
            .field("common", &self.common)
            .field("source", &self.source)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("non_interactive", &self.non_interactive)
            .field("force_english_output", &self.force_english_output)
            .field("no_service_endpoint", &self.no_service_endpoint)
            .field("interactive", &self.interactive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_keys() {
        let settings = NuGetPushSettings::default()
            .with_source("https://api.nuget.org/v3/index.json")
            .with_api_key("oy2topsecret");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("oy2topsecret"));
        assert!(debug.contains("[REDACTED]"));

        let delete = NuGetDeleteSettings {
            api_key: Some("oy2topsecret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", delete).contains("oy2topsecret"));
    }

    #[test]
    fn test_api_key_option_is_secret() {
        let settings = NuGetPushSettings::default().with_api_key("k");
        let option = settings
            .options()
            .into_iter()
            .find(|o| o.name == "api_key")
            .unwrap();
        assert_eq!(option.value, OptionValue::Secret(Some("k")));
    }

    #[test]
    fn test_delete_prompts_unless_non_interactive() {
        assert!(NuGetDeleteSettings::default().interactive_prompt());
        let settings = NuGetDeleteSettings {
            non_interactive: true,
            ..Default::default()
        };
        assert!(!settings.interactive_prompt());
        assert!(!NuGetPushSettings::default().interactive_prompt());
    }
}
