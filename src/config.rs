use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HospitalSync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "hospital_sync=info,tower_http=warn".to_string()
}

/// Directory holding the pre-authored HTML form templates.
/// Overridable via `HOSPITALSYNC_TEMPLATES_DIR`; defaults to `./templates`.
pub fn templates_dir() -> PathBuf {
    std::env::var_os("HOSPITALSYNC_TEMPLATES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Address the HTTP server binds to.
/// Overridable via `HOSPITALSYNC_BIND`; defaults to loopback — this is an
/// internal staff tool, not a public service.
pub fn bind_addr() -> Result<SocketAddr, String> {
    match std::env::var("HOSPITALSYNC_BIND") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| format!("Invalid HOSPITALSYNC_BIND '{raw}': {e}")),
        Err(_) => Ok(SocketAddr::from(([127, 0, 0, 1], 8590))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_is_loopback() {
        // Only valid when the env override is absent, as in the test env
        if std::env::var("HOSPITALSYNC_BIND").is_err() {
            let addr = bind_addr().unwrap();
            assert!(addr.ip().is_loopback());
            assert_eq!(addr.port(), 8590);
        }
    }

    #[test]
    fn app_name_is_hospital_sync() {
        assert_eq!(APP_NAME, "HospitalSync");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_scopes_own_crate() {
        assert!(default_log_filter().contains("hospital_sync"));
    }
}
