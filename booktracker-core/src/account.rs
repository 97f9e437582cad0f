//! Login and registration flows
//!
//! A successful submission tells the caller where to go next; a failed one
//! is logged and handed back untouched so the form can stay where it is.

use crate::client::AccountService;
use crate::error::Result;
use crate::types::{LoginRequest, RegisterRequest};
use std::sync::Arc;
use validator::Validate;

/// Where the presentation layer should navigate after a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Catalog home, after logging in
    Home,

    /// Login form, after registering
    Login,
}

pub struct AccountFlow {
    service: Arc<dyn AccountService>,
}

impl AccountFlow {
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }

    async fn send_login(&self, request: &LoginRequest) -> Result<()> {
        request.validate()?;
        self.service.login(request).await
    }

    async fn send_register(&self, request: &RegisterRequest) -> Result<()> {
        request.validate()?;
        self.service.register(request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Redirect> {
        let result = self.send_login(request).await;

        match result {
            Ok(()) => {
                tracing::info!(username = %request.username, "Logged in");
                Ok(Redirect::Home)
            }
            Err(err) => {
                tracing::error!(username = %request.username, error = %err, "Login failed");
                Err(err)
            }
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Redirect> {
        let result = self.send_register(request).await;

        match result {
            Ok(()) => {
                tracing::info!(username = %request.username, "Registered");
                Ok(Redirect::Login)
            }
            Err(err) => {
                tracing::error!(username = %request.username, error = %err, "Registration failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingService {
        calls: AtomicUsize,
        reject: bool,
    }

    #[async_trait]
    impl AccountService for CountingService {
        async fn login(&self, _request: &LoginRequest) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject {
                return Err(CatalogError::Api {
                    status: 401,
                    message: "bad credentials".into(),
                });
            }
            Ok(())
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_login_redirects_home() {
        let flow = AccountFlow::new(Arc::new(CountingService::default()));
        let redirect = flow.login(&LoginRequest::new("alice", "pw")).await.unwrap();
        assert_eq!(redirect, Redirect::Home);
    }

    #[tokio::test]
    async fn test_register_redirects_to_login() {
        let flow = AccountFlow::new(Arc::new(CountingService::default()));
        let redirect = flow
            .register(&RegisterRequest::new("bob", "bob@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(redirect, Redirect::Login);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let service = Arc::new(CountingService::default());
        let flow = AccountFlow::new(service.clone());
        let err = flow
            .register(&RegisterRequest::new("bob", "bob", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_login_surfaces_error() {
        let service = Arc::new(CountingService {
            reject: true,
            ..CountingService::default()
        });
        let flow = AccountFlow::new(service.clone());
        let err = flow.login(&LoginRequest::new("alice", "nope")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 401, .. }));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }
}
