use md5::{Digest, Md5};

/// Lowercase hex MD5 of the password's UTF-8 bytes, as Thunder expects it in
/// the `password` header.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Md5::digest(password.as_bytes()))
}
