use log::Level;

/// Scroll offset (px) past which the nav switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Period of the hero dashboard status loop.
pub const MOCK_CYCLE_MS: u32 = 2000;

/// Fraction of a section that must be on screen before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const CARD_STAGGER_S: f64 = 0.1;
pub const STEP_STAGGER_S: f64 = 0.15;

const DEFAULT_BASE_PATH: &str = "/clawbooks-landing/";

// Both read at compile time, Trunk passes the build environment through.
const BASE_PATH_ENV: Option<&str> = option_env!("CLAWBOOKS_BASE_PATH");
const NETLIFY_ENV: Option<&str> = option_env!("NETLIFY");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Picks the deploy prefix: an explicit path wins, Netlify serves from the
/// root, anything else is the project-pages default. Always `/`-delimited.
pub fn resolve_base_path(explicit: Option<&str>, netlify: Option<&str>) -> String {
    let raw = match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => path,
        None if netlify == Some("true") => "/",
        None => DEFAULT_BASE_PATH,
    };

    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

pub fn base_path() -> String {
    resolve_base_path(BASE_PATH_ENV, NETLIFY_ENV)
}

pub fn asset_url(name: &str) -> String {
    format!("{}{}", base_path(), name.trim_start_matches('/'))
}

/// Basename handed to the router, `None` when served from the domain root.
pub fn router_basename() -> Option<String> {
    basename_of(&base_path())
}

fn basename_of(base: &str) -> Option<String> {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn logo_src() -> String {
    asset_url("clawbooks-logo.svg")
}

pub fn mark_src() -> String {
    asset_url("favicon.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_netlify() {
        assert_eq!(resolve_base_path(Some("/docs/"), Some("true")), "/docs/");
    }

    #[test]
    fn netlify_serves_from_root() {
        assert_eq!(resolve_base_path(None, Some("true")), "/");
        assert_eq!(resolve_base_path(Some("  "), Some("true")), "/");
    }

    #[test]
    fn falls_back_to_project_path() {
        assert_eq!(resolve_base_path(None, None), "/clawbooks-landing/");
        assert_eq!(resolve_base_path(None, Some("false")), "/clawbooks-landing/");
    }

    #[test]
    fn normalizes_slashes() {
        assert_eq!(resolve_base_path(Some("landing"), None), "/landing/");
        assert_eq!(resolve_base_path(Some("//a/b//"), None), "/a/b/");
        assert_eq!(resolve_base_path(Some("/"), None), "/");
    }

    #[test]
    fn basename_drops_trailing_slash() {
        assert_eq!(basename_of("/clawbooks-landing/"), Some("/clawbooks-landing".to_string()));
        assert_eq!(basename_of("/"), None);
    }

    #[test]
    fn asset_urls_sit_under_base_path() {
        let logo = logo_src();
        assert!(logo.starts_with(&base_path()));
        assert!(logo.ends_with("/clawbooks-logo.svg"));
        assert!(!asset_url("/favicon.svg").contains("//favicon"));
    }
}
