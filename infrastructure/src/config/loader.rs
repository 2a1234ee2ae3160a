//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides (`NETCALL_DOTNET__TOOL_PATH=...`)
pub const ENV_PREFIX: &str = "NETCALL_";

/// Key under the prefix that feeds `[dotnet.environment]`.
///
/// Read outside figment's env provider so names keep their case and values
/// stay strings.
const ENVIRONMENT_KEY: &str = "DOTNET__ENVIRONMENT__";

const PROJECT_FILENAMES: [&str; 2] = ["netcall.toml", ".netcall.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `NETCALL_*`, nested keys split on `__`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./netcall.toml` or `./.netcall.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/netcall/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::figment(global.as_deref(), project.as_deref(), config_path, ENV_PREFIX)
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Layer the given sources over the built-in defaults.
    ///
    /// A missing explicit path is an error; global and project files are
    /// expected to be filtered by the caller.
    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        let environment_key = ENVIRONMENT_KEY.to_ascii_lowercase();
        figment = figment.merge(
            Env::prefixed(env_prefix)
                .filter(move |key| {
                    !key.as_str()
                        .to_ascii_lowercase()
                        .starts_with(&environment_key)
                })
                .split("__"),
        );

        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        let environment = Self::environment_overrides(env_prefix, vars);
        if !environment.is_empty() {
            let overlay =
                BTreeMap::from([("dotnet", BTreeMap::from([("environment", environment)]))]);
            figment = figment.merge(Serialized::defaults(overlay));
        }
        figment
    }

    /// Child environment entries given as `<prefix>DOTNET__ENVIRONMENT__<NAME>=<value>`.
    fn environment_overrides(
        env_prefix: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> BTreeMap<String, String> {
        let marker = format!("{}{}", env_prefix, ENVIRONMENT_KEY);
        vars.into_iter()
            .filter_map(|(key, value)| {
                let head = key.get(..marker.len())?;
                if !head.eq_ignore_ascii_case(&marker) {
                    return None;
                }
                let name = &key[marker.len()..];
                (!name.is_empty()).then(|| (name.to_string(), value))
            })
            .collect()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/netcall/config.toml on Linux and the platform
    /// equivalent elsewhere.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("netcall").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let found = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", found, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./netcall.toml or ./.netcall.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netcall_domain::OutputFormat;
    use std::fs;

    const UNSET_PREFIX: &str = "NETCALL_LOADER_TEST_UNSET_";

    fn extract(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, figment::Error> {
        ConfigLoader::figment(global, project, explicit, UNSET_PREFIX).extract()
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.dotnet.tool_path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        let config = extract(None, None, None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_later_sources_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("netcall.toml");
        let explicit = dir.path().join("ci.toml");

        fs::write(
            &global,
            r#"
[dotnet]
tool_path = "/usr/share/dotnet/dotnet"
capture_output = true

[output]
format = "json"
"#,
        )
        .unwrap();
        fs::write(
            &project,
            r#"
[dotnet]
tool_path = "/opt/dotnet/dotnet"
"#,
        )
        .unwrap();
        fs::write(
            &explicit,
            r#"
[output]
format = "text"
"#,
        )
        .unwrap();

        let config = extract(Some(&global), Some(&project), Some(&explicit)).unwrap();

        assert_eq!(
            config.dotnet.tool_path,
            Some(PathBuf::from("/opt/dotnet/dotnet"))
        );
        // Untouched keys survive from lower layers.
        assert!(config.dotnet.capture_output);
        assert_eq!(config.output.format, Some(OutputFormat::Text));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(extract(None, None, Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        assert!(extract(None, None, Some(&path)).is_err());
    }

    #[test]
    fn test_environment_overrides_files() {
        let prefix = "NETCALL_LOADER_TEST_ENV_";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netcall.toml");
        fs::write(&path, "[dotnet]\ncapture_output = false\n").unwrap();

        // SAFETY: the prefix is unique to this test, no other thread reads it.
        unsafe {
            std::env::set_var(format!("{}DOTNET__CAPTURE_OUTPUT", prefix), "true");
        }
        let config: FileConfig = ConfigLoader::figment(None, Some(&path), None, prefix)
            .extract()
            .unwrap();
        unsafe {
            std::env::remove_var(format!("{}DOTNET__CAPTURE_OUTPUT", prefix));
        }

        assert!(config.dotnet.capture_output);
    }

    #[test]
    fn test_environment_entries_keep_name_and_string_value() {
        let prefix = "NETCALL_LOADER_TEST_CHILD_ENV_";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("netcall.toml");
        fs::write(
            &path,
            "[dotnet.environment]\nDOTNET_CLI_TELEMETRY_OPTOUT = \"1\"\n",
        )
        .unwrap();

        let nologo = format!("{}DOTNET__ENVIRONMENT__DOTNET_NOLOGO", prefix);
        let capture = format!("{}DOTNET__CAPTURE_OUTPUT", prefix);
        // SAFETY: the prefix is unique to this test, no other thread reads it.
        unsafe {
            std::env::set_var(&nologo, "1");
            std::env::set_var(&capture, "true");
        }
        let result: Result<FileConfig, _> =
            ConfigLoader::figment(None, Some(&path), None, prefix).extract();
        unsafe {
            std::env::remove_var(&nologo);
            std::env::remove_var(&capture);
        }

        let config = result.unwrap();
        assert!(config.dotnet.capture_output);
        assert_eq!(
            config.dotnet.environment.get("DOTNET_NOLOGO").map(String::as_str),
            Some("1")
        );
        assert_eq!(
            config
                .dotnet
                .environment
                .get("DOTNET_CLI_TELEMETRY_OPTOUT")
                .map(String::as_str),
            Some("1")
        );
        assert!(!config.dotnet.environment.contains_key("dotnet_nologo"));
    }

    #[test]
    fn test_environment_overrides_match_prefix_only() {
        let vars = vec![
            ("NETCALL_DOTNET__ENVIRONMENT__Mixed_Case".to_string(), "v".to_string()),
            ("netcall_dotnet__environment__LOWER_PREFIX".to_string(), "w".to_string()),
            ("NETCALL_DOTNET__ENVIRONMENT__".to_string(), "ignored".to_string()),
            ("NETCALL_DOTNET__TOOL_PATH".to_string(), "/opt/dotnet".to_string()),
            ("DOTNET_NOLOGO".to_string(), "1".to_string()),
        ];

        let overrides = ConfigLoader::environment_overrides(ENV_PREFIX, vars);

        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["Mixed_Case"], "v");
        assert_eq!(overrides["LOWER_PREFIX"], "w");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("netcall"));
    }
}
