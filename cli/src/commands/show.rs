//! Show command - Prints the loaded settings.

use assistant_settings::{ConfigResult, Settings, SettingsLoader};

use crate::args::ShowArgs;

/// Execute the show command
pub fn execute(args: ShowArgs, loader: &SettingsLoader) -> ConfigResult<()> {
    let settings = loader.load()?;
    println!("{}", render(&settings, args.json));
    Ok(())
}

/// Pretty JSON or `{:#?}` output; the API key never appears in either
pub fn render(settings: &Settings, json: bool) -> String {
    if json {
        // Settings serialization has no fallible fields
        serde_json::to_string_pretty(settings).unwrap_or_default()
    } else {
        format!("{:#?}", settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assistant_settings::{EnvFile, EnvironmentType, LayeredSource};

    use super::*;

    fn settings() -> Settings {
        let env = HashMap::from([("OPENAI_API_KEY".to_string(), "sk-secret".to_string())]);
        let source = LayeredSource::new(&env, EnvFile::default());
        Settings::from_source(EnvironmentType::Local, &source).unwrap()
    }

    #[test]
    fn test_render_json() {
        let out = render(&settings(), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["ENVIRONMENT"], "local");
        assert_eq!(value["VOICE"], "alloy");
        assert!(!out.contains("sk-secret"));
    }

    #[test]
    fn test_render_debug_redacts_key() {
        let out = render(&settings(), false);

        assert!(out.contains("[REDACTED]"));
        assert!(!out.contains("sk-secret"));
    }
}
