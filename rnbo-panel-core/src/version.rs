use crate::errors::{PanelError, PanelResult};

/// exporters built in debug mode stamp the version with a `-dev` suffix.
/// there is no hosted script for those, so loading one is a configuration
/// error for the developer to fix, not something to fall back from
pub fn check_runtime_version(version: &str) -> PanelResult<()> {
    if version.trim().ends_with("-dev") {
        return Err(PanelError::DebugRuntime(version.to_string()));
    }

    Ok(())
}

/// version-pinned script location on the public cdn
pub fn runtime_script_url(cdn_base: &str, version: &str) -> String {
    format!("{}/{}/rnbo.min.js", cdn_base.trim_end_matches('/'), version)
}

#[cfg(test)]
mod tests {
    use super::{check_runtime_version, runtime_script_url};
    use crate::errors::PanelError;

    #[test_log::test]
    fn test_release_versions_pass() {
        check_runtime_version("1.3.2").unwrap();
        check_runtime_version("1.4.0-alpha.1").unwrap();
    }

    #[test_log::test]
    fn test_debug_versions_rejected() {
        let err = check_runtime_version("1.3.2-dev").unwrap_err();
        assert!(matches!(err, PanelError::DebugRuntime(_)));

        check_runtime_version(" 1.3.2-dev ").unwrap_err();
    }

    #[test_log::test]
    fn test_script_url() {
        let url = runtime_script_url("https://example.com/rnbo", "1.3.2");
        assert_eq!(url, "https://example.com/rnbo/1.3.2/rnbo.min.js");

        // trailing slash on the base doesn't double up
        let url = runtime_script_url("https://example.com/rnbo/", "1.3.2");
        assert_eq!(url, "https://example.com/rnbo/1.3.2/rnbo.min.js");
    }
}
