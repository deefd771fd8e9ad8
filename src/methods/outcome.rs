use std::{fmt::Display, process::ExitCode};

use http::Method;

use crate::{Response, Verbosity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Self::Add => Method::POST,
            Self::Get => Method::GET,
            Self::Update => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Get => "retrieved",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.verb().fmt(f)
    }
}

/// Result of one call, rendered according to the requested verbosity.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub operation: Operation,
    pub response: Response,
    pub verbosity: Verbosity,
}

impl Outcome {
    pub fn new(operation: Operation, response: Response, verbosity: Verbosity) -> Self {
        Self {
            operation,
            response,
            verbosity,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response.status.is_success()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_success() {
            write!(f, "Successfully {} user.", self.operation.past_tense())?;
        } else {
            write!(
                f,
                "Failed to {} user (status {}).",
                self.operation.verb(),
                self.response.status.as_u16()
            )?;
        }
        if self.verbosity == Verbosity::Response {
            write!(f, "\nHTTP {}", self.response.status)?;
            if !self.response.body.is_empty() {
                write!(f, "\n{}", self.response.body)?;
            }
        }
        Ok(())
    }
}
