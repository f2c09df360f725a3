mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use octocrab_utils::github_api;
pub(crate) use parser::Cli;
pub(crate) use tracing::init as init_tracing;
