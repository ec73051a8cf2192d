use anyhow::{Context, Result};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, DecodingKey, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Install the validation secret. When the configuration carries none, a
/// random secret is generated; externally issued tokens are then rejected
/// until a shared secret is configured.
pub fn initialize_secret(configured: Option<&str>) {
    let secret = match configured {
        Some(secret) => secret.to_string(),
        None => {
            tracing::warn!("No auth.jwt_secret configured, generating a random one");
            generate_jwt_secret()
        }
    };
    let _ = JWT_SECRET.set(secret);
}

fn secret() -> &'static str {
    JWT_SECRET.get().map(String::as_str).unwrap_or("")
}

/// Validate a bearer token and extract its claims.
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret().as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}
