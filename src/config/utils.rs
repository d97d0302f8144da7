/// Interpret a flag such as `TTS_SLOW`.
///
/// `true`/`yes`/`on`/`1` and their negatives are recognised regardless of
/// case or surrounding whitespace; anything else is `None`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Read an environment variable, treating empty values as unset
pub fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_slow_flag_values() {
        for raw in ["true", "Yes", " on ", "1"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["FALSE", "no", "Off", "0"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        for raw in ["sometimes", "", "2"] {
            assert_eq!(parse_bool(raw), None, "{raw}");
        }
    }

    #[test]
    #[serial]
    fn test_env_non_empty_skips_blank_key() {
        unsafe {
            std::env::set_var("X_API_KEY", "  ");
        }
        assert_eq!(env_non_empty("X_API_KEY"), None);

        unsafe {
            std::env::set_var("X_API_KEY", "dv-key");
        }
        assert_eq!(env_non_empty("X_API_KEY").as_deref(), Some("dv-key"));

        unsafe {
            std::env::remove_var("X_API_KEY");
        }
        assert_eq!(env_non_empty("X_API_KEY"), None);
    }
}
