//! Login and register command implementations

use anyhow::{Context, Result};
use booktracker_core::{AccountFlow, HttpCatalogClient, LoginRequest, Redirect, RegisterRequest};
use std::sync::Arc;

fn next_step(redirect: Redirect) -> &'static str {
    match redirect {
        Redirect::Home => "Continue with `booktracker browse`.",
        Redirect::Login => "Log in with `booktracker login`.",
    }
}

/// Log in with a username and password
pub async fn login(client: Arc<HttpCatalogClient>, username: &str, password: &str) -> Result<()> {
    let flow = AccountFlow::new(client);
    let redirect = flow
        .login(&LoginRequest::new(username, password))
        .await
        .context("Login failed")?;

    println!("Logged in as {}. {}", username, next_step(redirect));
    Ok(())
}

/// Create a new account
pub async fn register(
    client: Arc<HttpCatalogClient>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let flow = AccountFlow::new(client);
    let redirect = flow
        .register(&RegisterRequest::new(username, email, password))
        .await
        .context("Registration failed")?;

    println!("Registered {}. {}", username, next_step(redirect));
    Ok(())
}
