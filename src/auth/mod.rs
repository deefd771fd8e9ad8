mod credentials;
mod password;

pub use credentials::Credentials;
pub use password::hash_password;
