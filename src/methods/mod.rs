//! The calls Thunder exposes on its `/users` resource.
//!
//! Every call builds exactly one [`Request`] and sends it once through the
//! configured [`Transport`]; there are no retries.
mod outcome;

use essentials::debug;

pub use outcome::{Operation, Outcome};

use crate::{Credentials, Request, Result, Transport, UserBody, Verbosity};

pub struct ThunderClient<T> {
    transport: T,
}

impl<T: Transport> ThunderClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST url` with the user as JSON body.
    pub async fn add_user(
        &self,
        url: &str,
        authentication: &Credentials,
        body: UserBody,
        verbosity: Verbosity,
    ) -> Result<Outcome> {
        let request = Request::new(Operation::Add.method(), url, authentication.clone())
            .with_body(body.into_value());
        self.send(Operation::Add, request, verbosity).await
    }

    /// `GET url?params` with `headers`.
    pub async fn get_user(
        &self,
        url: &str,
        authentication: &Credentials,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
        verbosity: Verbosity,
    ) -> Result<Outcome> {
        let request = Request::new(Operation::Get.method(), url, authentication.clone())
            .with_query(params)
            .with_headers(headers)?;
        self.send(Operation::Get, request, verbosity).await
    }

    /// `PUT url?params` with `headers` and the updated user as JSON body.
    pub async fn update_user(
        &self,
        url: &str,
        authentication: &Credentials,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
        body: UserBody,
        verbosity: Verbosity,
    ) -> Result<Outcome> {
        let request = Request::new(Operation::Update.method(), url, authentication.clone())
            .with_query(params)
            .with_headers(headers)?
            .with_body(body.into_value());
        self.send(Operation::Update, request, verbosity).await
    }

    /// `DELETE url?params` with `headers`.
    pub async fn delete_user(
        &self,
        url: &str,
        authentication: &Credentials,
        params: &[(&str, &str)],
        headers: &[(&str, &str)],
        verbosity: Verbosity,
    ) -> Result<Outcome> {
        let request = Request::new(Operation::Delete.method(), url, authentication.clone())
            .with_query(params)
            .with_headers(headers)?;
        self.send(Operation::Delete, request, verbosity).await
    }

    async fn send(
        &self,
        operation: Operation,
        request: Request,
        verbosity: Verbosity,
    ) -> Result<Outcome> {
        debug!(
            %operation,
            url = %request.url,
            principal = %request.credentials.principal,
            "-->"
        );
        let response = self.transport.send(request).await?;
        debug!(%operation, status = response.status.as_u16(), "<--");
        Ok(Outcome::new(operation, response, verbosity))
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use http::{Method, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{hash_password, transport::HeaderMapExt, Response};

    struct RecordingTransport {
        status: StatusCode,
        requests: Mutex<Vec<Request>>,
    }

    impl RecordingTransport {
        fn new(status: StatusCode) -> Self {
            Self {
                status,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: Request) -> Result<Response> {
            self.requests.lock().unwrap().push(request);
            Ok(Response::new(self.status).with_body("{}"))
        }
    }

    fn auth() -> Credentials {
        Credentials::new("application", "secret")
    }

    #[tokio::test]
    async fn test_add_user() {
        let client = ThunderClient::new(RecordingTransport::new(StatusCode::CREATED));
        let body = UserBody::from_json(r#"{"email": {"address": "john@doe.com"}}"#).unwrap();
        let outcome = client
            .add_user(
                "http://localhost:8080/users",
                &auth(),
                body,
                Verbosity::Quiet,
            )
            .await
            .unwrap();
        assert!(outcome.is_success());
        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://localhost:8080/users");
        assert_eq!(request.credentials, auth());
        assert!(request.query.is_empty());
        assert_eq!(
            request.body,
            Some(json!({"email": {"address": "john@doe.com"}}))
        );
    }

    #[tokio::test]
    async fn test_delete_user() {
        let client = ThunderClient::new(RecordingTransport::new(StatusCode::OK));
        let password = hash_password("hunter2");
        client
            .delete_user(
                "http://localhost:8080/users",
                &auth(),
                &[("username", "john")],
                &[("password", password.as_str())],
                Verbosity::Response,
            )
            .await
            .unwrap();
        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.query,
            vec![("username".to_string(), "john".to_string())]
        );
        assert_eq!(
            request.header("password").unwrap(),
            "2ab96390c7dbe3439de74d0c9b0b1767"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_get_and_update_user() {
        let client = ThunderClient::new(RecordingTransport::new(StatusCode::OK));
        let password = hash_password("hunter2");
        let body = UserBody::from_json(r#"{"email": {"address": "new@doe.com"}}"#).unwrap();
        client
            .get_user(
                "http://localhost:8080/users",
                &auth(),
                &[("username", "john")],
                &[("password", password.as_str())],
                Verbosity::Quiet,
            )
            .await
            .unwrap();
        client
            .update_user(
                "http://localhost:8080/users",
                &auth(),
                &[("username", "john")],
                &[("password", password.as_str())],
                body,
                Verbosity::Quiet,
            )
            .await
            .unwrap();
        let requests = client.transport().requests();
        assert_eq!(
            requests.iter().map(|r| r.method.clone()).collect::<Vec<_>>(),
            vec![Method::GET, Method::PUT]
        );
        assert!(requests[0].body.is_none());
        assert_eq!(
            requests[1].body,
            Some(json!({"email": {"address": "new@doe.com"}}))
        );
        assert_eq!(requests[1].header("password").unwrap(), password.as_str());
    }

    #[tokio::test]
    async fn test_failure_status_is_reported() {
        let client = ThunderClient::new(RecordingTransport::new(StatusCode::UNAUTHORIZED));
        let outcome = client
            .delete_user(
                "http://localhost:8080/users",
                &auth(),
                &[("username", "john")],
                &[("password", "x")],
                Verbosity::Quiet,
            )
            .await
            .unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "Failed to delete user (status 401).");
    }

    #[tokio::test]
    async fn test_invalid_header_is_not_sent() {
        let client = ThunderClient::new(RecordingTransport::new(StatusCode::OK));
        let result = client
            .delete_user(
                "http://localhost:8080/users",
                &auth(),
                &[("username", "john")],
                &[("password", "line\nbreak")],
                Verbosity::Quiet,
            )
            .await;
        assert!(result.is_err());
        assert!(client.transport().requests().is_empty());
    }
}
