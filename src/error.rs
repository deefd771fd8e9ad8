use std::fmt::Display;

use http::header::{InvalidHeaderName, InvalidHeaderValue};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Credentials(String),
    Body(Body),
    Io(std::io::Error),
    Header(Header),
    Transport(reqwest::Error),
}

#[derive(Debug)]
pub enum Body {
    InvalidJson(serde_json::Error),
    NotAnObject,
}

#[derive(Debug)]
pub enum Header {
    InvalidName(InvalidHeaderName),
    InvalidValue(InvalidHeaderValue),
}

impl Error {
    pub fn credentials<S: AsRef<str>>(message: S) -> Self {
        Self::Credentials(message.as_ref().to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Body(Body::InvalidJson(value))
    }
}

impl From<Body> for Error {
    fn from(value: Body) -> Self {
        Self::Body(value)
    }
}

impl From<InvalidHeaderName> for Error {
    fn from(value: InvalidHeaderName) -> Self {
        Self::Header(Header::InvalidName(value))
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(value: InvalidHeaderValue) -> Self {
        Self::Header(Header::InvalidValue(value))
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Credentials(message) => write!(f, "Invalid credentials: {message}"),
            Self::Body(Body::InvalidJson(_)) => "Invalid JSON body".fmt(f),
            Self::Body(Body::NotAnObject) => "User body must be a JSON object".fmt(f),
            Self::Io(_) => "I/O error".fmt(f),
            Self::Header(Header::InvalidName(error)) => write!(f, "Invalid header name: {error}"),
            Self::Header(Header::InvalidValue(error)) => {
                write!(f, "Invalid header value: {error}")
            }
            Self::Transport(_) => "Request failed".fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Body(Body::InvalidJson(error)) => Some(error),
            Self::Io(error) => Some(error),
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_wrapped_errors_are_not_repeated_in_display() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause = json.to_string();
        let error = Error::from(json);
        assert_eq!(error.to_string(), "Invalid JSON body");
        assert_eq!(error.source().unwrap().to_string(), cause);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "user.json");
        let error = Error::from(io);
        assert_eq!(error.to_string(), "I/O error");
        assert_eq!(error.source().unwrap().to_string(), "user.json");
    }

    #[test]
    fn test_errors_without_source_carry_their_message() {
        let error = Error::credentials("expected principal:secret");
        assert_eq!(
            error.to_string(),
            "Invalid credentials: expected principal:secret"
        );
        assert!(error.source().is_none());
        assert!(Error::from(Body::NotAnObject).source().is_none());
    }
}
