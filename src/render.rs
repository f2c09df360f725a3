use std::fmt::Display;

use anyhow::Result;
use askama::Template;
use chrono::{DateTime, TimeZone};

use crate::badge::BadgeData;
use crate::constants::TIMESTAMP_FORMAT;

// Names come from our own configuration and GitHub, so they are interpolated verbatim.
#[derive(Template)]
#[template(path = "wall.html", escape = "none")]
struct Wall<'a> {
    repos: &'a [BadgeData],
    updated_at: String,
}

/// Render the status wall page. `now` only feeds the “Last updated” footer.
pub(crate) fn render<Tz>(repos: &[BadgeData], now: &DateTime<Tz>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(Wall {
        repos,
        updated_at: now.format(TIMESTAMP_FORMAT).to_string(),
    }
    .render()?)
}
