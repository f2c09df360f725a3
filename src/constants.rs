pub(crate) const PLATFORM_URL: &str = "https://github.com";
/// Whitelist entry that selects every workflow of a repository.
pub(crate) const ALL_WORKFLOWS: &str = "all";
pub(crate) const BADGE_SUFFIX: &str = "/badge.svg";
pub(crate) const TOKEN_CREDENTIAL: &str = "github_token";
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
