use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};

pub(crate) fn github_api(token: &SecretString, api_base: Option<&str>) -> Result<octocrab::Octocrab> {
    let mut builder = octocrab::Octocrab::builder()
        // https://github.com/XAMPPRocky/octocrab/issues/594
        .personal_token(token.expose_secret().to_owned());
    if let Some(uri) = api_base {
        builder = builder.base_uri(uri)?;
    }
    Ok(builder.build()?)
}
