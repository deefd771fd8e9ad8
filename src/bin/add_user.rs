use std::process::ExitCode;

use anyhow::{Context, Result};
use structopt::StructOpt;
use thunder_requests::{cli, cli::AddUserArgs, HttpTransport, ThunderClient, UserBody};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    cli::install_logging();
    let args = AddUserArgs::from_args();
    let body = UserBody::from_file(&args.filename)
        .with_context(|| format!("Failed to read user file {}", args.filename.display()))?;
    let client = ThunderClient::new(HttpTransport::new()?);
    let outcome = client
        .add_user(
            &args.connection.users_url(),
            &args.connection.auth,
            body,
            args.connection.verbosity,
        )
        .await?;
    println!("{outcome}");
    Ok(outcome.exit_code())
}
