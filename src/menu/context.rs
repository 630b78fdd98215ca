use std::collections::HashSet;

use crate::config::PortalConfig;

/// Feature flags the menu builders branch on. Populated from configuration
/// by the HTTP layer, but carried as plain strings so the builders stay
/// decoupled from the config shape.
pub mod flags {
    /// Self-service account registration is open.
    pub const OPEN_SIGNUP: &str = "open-signup";
    /// The monitoring dashboard is deployed.
    pub const MONITORING: &str = "monitoring";
    /// The portal is in read-only maintenance mode.
    pub const READ_ONLY: &str = "read-only";
}

/// Identity and presentation data for the signed-in user, as shown in the
/// user-menu dropdown header.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalUser {
    pub username: String,
    pub first_name: String,
    pub avatar_url: String,
}

impl PortalUser {
    pub fn profile_url(&self) -> String {
        format!("/people/profile/{}", self.username)
    }
}

/// Explicit request context the menu builders are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct MenuContext {
    pub is_authenticated: bool,
    pub is_superuser: bool,
    pub is_mobile: bool,
    pub feature_flags: HashSet<String>,
    pub user: Option<PortalUser>,
}

impl MenuContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Assemble the context for one request: optional signed-in user, the
    /// caller's user agent, and the portal configuration the feature flags
    /// derive from.
    pub fn build(
        user: Option<PortalUser>,
        is_superuser: bool,
        user_agent: Option<&str>,
        portal: &PortalConfig,
    ) -> Self {
        let mut feature_flags = HashSet::new();
        if portal.open_signup {
            feature_flags.insert(flags::OPEN_SIGNUP.to_string());
        }
        if portal.monitoring_enabled {
            feature_flags.insert(flags::MONITORING.to_string());
        }
        if portal.read_only {
            feature_flags.insert(flags::READ_ONLY.to_string());
        }

        Self {
            is_authenticated: user.is_some(),
            is_superuser,
            is_mobile: user_agent.map(is_mobile_user_agent).unwrap_or(false),
            feature_flags,
            user,
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.feature_flags.contains(flag)
    }
}

/// Keyword sniff over the User-Agent header. Coarse on purpose: the only
/// consumer is menu layout, where a false negative just shows the desktop
/// tree.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    const MOBILE_MARKERS: &[&str] = &[
        "mobile",
        "android",
        "iphone",
        "ipad",
        "ipod",
        "opera mini",
        "windows phone",
    ];

    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}
