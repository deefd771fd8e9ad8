//! Command line arguments shared by the Thunder request tools.
mod body;

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use structopt::StructOpt;

pub use body::UserBody;

use crate::Credentials;

/// Installs the logger with a `warn` filter unless `RUST_LOG` says otherwise.
/// Nothing on the request path logs above `debug`, so by default stdout only
/// carries the outcome.
pub fn install_logging() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    essentials::install();
}

/// Builds the request target from the base endpoint.
///
/// The path is appended as-is, so a trailing slash on `endpoint` is kept.
pub fn users_url(endpoint: &str) -> String {
    format!("{endpoint}/users")
}

/// How much of the response the tools print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `0`: only success or failure.
    #[default]
    Quiet,
    /// `1`: also the HTTP status and response body.
    Response,
}

impl FromStr for Verbosity {
    type Err = String;

    /// Parses an integer, so `01` and `+1` are accepted; only 0 and 1 are
    /// valid levels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().parse::<i64>() {
            Ok(0) => Ok(Self::Quiet),
            Ok(1) => Ok(Self::Response),
            _ => Err(format!("verbosity must be 0 or 1, got '{value}'")),
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quiet => "0".fmt(f),
            Self::Response => "1".fmt(f),
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct ConnectionArgs {
    /// the base endpoint to connect to
    #[structopt(short, long, default_value = "http://localhost:8080")]
    pub endpoint: String,

    /// 0 = only success/failure. 1 = show HTTP response
    #[structopt(short, long, default_value = "0")]
    pub verbosity: Verbosity,

    /// authentication credentials to connect to the endpoint
    #[structopt(short, long, default_value = "application:secret")]
    pub auth: Credentials,
}

impl ConnectionArgs {
    pub fn users_url(&self) -> String {
        users_url(&self.endpoint)
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "add_user", about = "Script to add a user via Thunder")]
pub struct AddUserArgs {
    /// JSON file containing the user details
    #[structopt(parse(from_os_str))]
    pub filename: PathBuf,

    #[structopt(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments of the tools that address an existing user.
#[derive(Debug, StructOpt)]
pub struct ExistingUserArgs {
    /// username of the user
    pub username: String,

    /// password of the user
    pub password: String,

    #[structopt(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "update_user", about = "Script to update a user via Thunder")]
pub struct UpdateUserArgs {
    /// username of the user to update
    pub username: String,

    /// current password of the user to update
    pub password: String,

    /// JSON file containing the updated user details
    #[structopt(parse(from_os_str))]
    pub filename: PathBuf,

    #[structopt(flatten)]
    pub connection: ConnectionArgs,
}
