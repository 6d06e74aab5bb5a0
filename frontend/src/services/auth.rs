use gloo::timers::future::TimeoutFuture;
use shared::error::AuthError;
use shared::session::is_valid_email;

/// Simulated backend latency for a login attempt.
pub const LOGIN_DELAY_MS: u32 = 1_000;

/// Which account tab the login form is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginRole {
    #[default]
    Provider,
    Admin,
}

impl LoginRole {
    pub fn label(&self) -> &'static str {
        match self {
            LoginRole::Provider => "Provider",
            LoginRole::Admin => "Admin",
        }
    }

    pub fn email_placeholder(&self) -> &'static str {
        match self {
            LoginRole::Provider => "Enter your registered email",
            LoginRole::Admin => "admin@roadr.com",
        }
    }
}

/// Mocked sign-in. Field presence and email shape are rejected before
/// the simulated network call; any well-formed credentials are then
/// accepted after the delay.
pub async fn login(email: &str, password: &str, role: LoginRole) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if !is_valid_email(email) {
        return Err(AuthError::InvalidCredentials);
    }
    TimeoutFuture::new(LOGIN_DELAY_MS).await;
    gloo::console::log!("login accepted:", email.trim(), role.label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_malformed_email_rejected_before_network_call() {
        // Resolves immediately: the shape check short-circuits the
        // simulated delay.
        assert_eq!(
            login("not-an-email", "secret", LoginRole::Provider).await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            login("user@nodot", "secret", LoginRole::Provider).await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[wasm_bindgen_test]
    async fn test_missing_fields_rejected() {
        assert_eq!(
            login("", "secret", LoginRole::Provider).await,
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            login("demo@provider.com", "", LoginRole::Admin).await,
            Err(AuthError::MissingCredentials)
        );
    }

    #[wasm_bindgen_test]
    async fn test_well_formed_credentials_accepted() {
        assert_eq!(
            login("demo@provider.com", "demo123", LoginRole::Provider).await,
            Ok(())
        );
    }
}
