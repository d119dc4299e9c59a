use anyhow::{bail, Result};
use dialoguer::{Input, Password};

use crate::{
    client::{ArkeClient, SessionTokens},
    config::{Project, ProjectStore},
};

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            bail!("Username is required");
        }
        if password.is_empty() {
            bail!("Password is required");
        }
        Ok(Credentials { username, password })
    }
}

pub async fn run(store: &impl ProjectStore, project_key: &str) -> Result<()> {
    let project = store.load()?.require(project_key)?.clone();
    login(store, &project).await?;
    Ok(())
}

/// Prompt for credentials, sign in and persist the new tokens
pub async fn login(store: &impl ProjectStore, project: &Project) -> Result<Project> {
    let username: String = Input::new()
        .with_prompt("Enter your username")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Enter your password")
        .allow_empty_password(true)
        .interact()?;
    let credentials = Credentials::new(username, password)?;
    authenticate(store, project, &credentials).await
}

/// Sign in with `credentials` and store the returned tokens on the project
pub async fn authenticate(
    store: &impl ProjectStore,
    project: &Project,
    credentials: &Credentials,
) -> Result<Project> {
    println!("Logging in to {}...", project.name);
    let client = ArkeClient::new(&project.without_session())?;
    let tokens = client
        .sign_in(&credentials.username, &credentials.password)
        .await?;
    check_tokens(&tokens)?;

    let mut cfg = store.load()?;
    let updated = cfg.set_tokens(&project.key, &tokens.access_token, &tokens.refresh_token)?;
    store.save(&cfg)?;
    tracing::info!(project = %project.key, "stored session tokens");
    println!("✅ Successfully logged in!");
    Ok(updated)
}

fn check_tokens(tokens: &SessionTokens) -> Result<()> {
    if tokens.access_token.is_empty() || tokens.refresh_token.is_empty() {
        bail!("Auth failed, please try again");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_fields() {
        assert_eq!(
            Credentials::new("", "secret").unwrap_err().to_string(),
            "Username is required"
        );
        assert_eq!(
            Credentials::new("admin", "").unwrap_err().to_string(),
            "Password is required"
        );
        assert!(Credentials::new("admin", "secret").is_ok());
    }

    #[test]
    fn test_empty_tokens_are_rejected() {
        let tokens = SessionTokens {
            access_token: "a".into(),
            refresh_token: String::new(),
        };
        assert_eq!(
            check_tokens(&tokens).unwrap_err().to_string(),
            "Auth failed, please try again"
        );
    }
}
