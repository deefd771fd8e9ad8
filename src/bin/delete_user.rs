use std::process::ExitCode;

use anyhow::Result;
use structopt::StructOpt;
use thunder_requests::{cli, cli::ExistingUserArgs, hash_password, HttpTransport, ThunderClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    cli::install_logging();
    let app = ExistingUserArgs::clap()
        .name("delete_user")
        .about("Script to delete a user via Thunder");
    let args = ExistingUserArgs::from_clap(&app.get_matches());
    let password = hash_password(&args.password);
    let client = ThunderClient::new(HttpTransport::new()?);
    let outcome = client
        .delete_user(
            &args.connection.users_url(),
            &args.connection.auth,
            &[("username", args.username.as_str())],
            &[("password", password.as_str())],
            args.connection.verbosity,
        )
        .await?;
    println!("{outcome}");
    Ok(outcome.exit_code())
}
