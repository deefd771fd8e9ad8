//! Request helpers for the Thunder user-management service.
//!
//! Every tool in `src/bin` follows the same shape: parse the command line,
//! turn the raw arguments into [`Credentials`], a [`UserBody`] or a password
//! digest, and hand a single request to a [`ThunderClient`].
//!
//! # Example usage
//!
//! ```no_run
//! use thunder_requests::{hash_password, Credentials, HttpTransport, ThunderClient, Verbosity};
//!
//! # async fn run() -> thunder_requests::Result<()> {
//! let auth: Credentials = "application:secret".parse()?;
//! let client = ThunderClient::new(HttpTransport::new()?);
//! let password = hash_password("hunter2");
//! let outcome = client
//!     .delete_user(
//!         "http://localhost:8080/users",
//!         &auth,
//!         &[("username", "john")],
//!         &[("password", password.as_str())],
//!         Verbosity::Quiet,
//!     )
//!     .await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```
pub mod auth;
pub mod cli;
pub mod error;
pub mod methods;
pub mod transport;

pub use auth::{hash_password, Credentials};
pub use cli::{users_url, ConnectionArgs, UserBody, Verbosity};
pub use error::{Error, Result};
pub use methods::{Operation, Outcome, ThunderClient};
pub use transport::{HttpTransport, Request, Response, Transport};
