use std::process::ExitCode;

use anyhow::{Context, Result};
use structopt::StructOpt;
use thunder_requests::{
    cli, cli::UpdateUserArgs, hash_password, HttpTransport, ThunderClient, UserBody,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    cli::install_logging();
    let args = UpdateUserArgs::from_args();
    let body = UserBody::from_file(&args.filename)
        .with_context(|| format!("Failed to read user file {}", args.filename.display()))?;
    let password = hash_password(&args.password);
    let client = ThunderClient::new(HttpTransport::new()?);
    let outcome = client
        .update_user(
            &args.connection.users_url(),
            &args.connection.auth,
            &[("username", args.username.as_str())],
            &[("password", password.as_str())],
            body,
            args.connection.verbosity,
        )
        .await?;
    println!("{outcome}");
    Ok(outcome.exit_code())
}
