//! Loading and saving extraction options as JSON.

use std::fs;
use std::path::Path;

use isogrid_core::{ExtractOptions, Result};

/// Parses options from a JSON string and validates them.
///
/// Missing fields take their defaults, so `{}` is the default configuration.
pub fn options_from_str(json: &str) -> Result<ExtractOptions> {
    let options: ExtractOptions = serde_json::from_str(json)?;
    options.validate()?;
    Ok(options)
}

/// Reads options from a JSON file.
pub fn load_options(path: impl AsRef<Path>) -> Result<ExtractOptions> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let options = options_from_str(&text)?;
    log::debug!("loaded extraction options from {}", path.display());
    Ok(options)
}

/// Writes options to a JSON file.
pub fn save_options(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<()> {
    let json = serde_json::to_string_pretty(options)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use isogrid_core::IsogridError;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(options_from_str("{}").unwrap(), ExtractOptions::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = options_from_str("{ isovalue: }").unwrap_err();
        assert!(matches!(err, IsogridError::JsonError(_)));
    }

    #[test]
    fn test_invalid_limit_rejected() {
        let err = options_from_str(r#"{ "cell_limit": [0, 1, 1] }"#).unwrap_err();
        assert!(matches!(err, IsogridError::InvalidOption(_)));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("isogrid-options-{}.json", std::process::id()));
        let options = ExtractOptions::legacy().with_isovalue(0.25);
        save_options(&path, &options).unwrap();
        let loaded = load_options(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file() {
        let err = load_options("/nonexistent/isogrid/options.json").unwrap_err();
        assert!(matches!(err, IsogridError::IoError(_)));
    }
}
