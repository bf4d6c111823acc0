//! JWT authentication for the admin back office
//!
//! Product and order mutations are password-gated. Authentication is
//! stateless: a login issues an access/refresh token pair and every admin
//! request carries the access token as a bearer header.
//!
//! ## Usage
//! ```bash
//! # Set environment variables
//! STORE_JWT_SECRET=your-super-secret-key-at-least-32-chars
//! STORE_USERS=merve:sifre123:admin,deniz:sifre456
//!
//! # Login to get token
//! curl -X POST http://localhost:3030/auth/login \
//!   -H "Content-Type: application/json" \
//!   -d '{"username":"merve","password":"sifre123"}'
//! ```

use std::collections::HashMap;

use bcrypt::{hash, verify, DEFAULT_COST};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Role granted full back-office access
pub const ROLE_ADMIN: &str = "admin";
/// Default role for configured users without an explicit one
pub const ROLE_CUSTOMER: &str = "customer";

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// User role ("admin" or "customer")
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
}

impl Claims {
    /// Create new access token claims
    pub fn new_access(username: String, role: String, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: username,
            role,
            iat: now,
            exp: now + ttl_seconds,
            token_type: "access".to_string(),
        }
    }

    /// Create new refresh token claims (role is re-derived at refresh time)
    pub fn new_refresh(username: String, ttl_seconds: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: username,
            role: String::new(),
            iat: now,
            exp: now + ttl_seconds,
            token_type: "refresh".to_string(),
        }
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }

    /// Check if the token carries back-office access
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// A configured back-office or customer account
#[derive(Debug, Clone)]
pub struct StoreUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// JWT authentication manager
pub struct StoreAuth {
    /// Secret key for signing tokens
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// User store (username -> StoreUser)
    users: HashMap<String, StoreUser>,
    /// Access token TTL in seconds (default: 1 hour)
    pub access_token_ttl: i64,
    /// Refresh token TTL in seconds (default: 7 days)
    pub refresh_token_ttl: i64,
}

impl StoreAuth {
    /// Default filename for persisted JWT secret
    const SECRET_FILE: &'static str = ".jwt_secret";

    /// Create new StoreAuth with secret key
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            users: HashMap::new(),
            access_token_ttl: 3600,    // 1 hour
            refresh_token_ttl: 604800, // 7 days
        }
    }

    /// Load the signing secret from disk, minting one on first boot
    ///
    /// Admin logins stay valid across restarts when STORE_JWT_SECRET is
    /// not set.
    fn load_or_create_secret_file() -> Result<String, AuthError> {
        use std::fs;

        if let Ok(existing) = fs::read_to_string(Self::SECRET_FILE) {
            let existing = existing.trim();
            if existing.len() >= 32 {
                eprintln!("[Auth] Loaded JWT secret from {}", Self::SECRET_FILE);
                return Ok(existing.to_string());
            }
            eprintln!(
                "[Auth] WARNING: secret in {} is too short, minting a new one",
                Self::SECRET_FILE
            );
        }

        let secret = Self::mint_secret();

        if let Err(e) = fs::write(Self::SECRET_FILE, &secret) {
            eprintln!(
                "[Auth] WARNING: could not save secret to {}: {}",
                Self::SECRET_FILE,
                e
            );
            eprintln!("[Auth] Admin logins will not survive a restart");
        } else {
            eprintln!(
                "[Auth] Minted JWT secret into {}; set STORE_JWT_SECRET for production",
                Self::SECRET_FILE
            );
        }

        Ok(secret)
    }

    /// Mint a 64-char hex signing secret
    ///
    /// Folds the store clock and process id through four independently
    /// seeded hashers; each `RandomState` contributes its own thread-local
    /// randomness, so the words are not derivable from the timestamp.
    fn mint_secret() -> String {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let clock = crate::utils::time::current_timestamp_millis();
        let mut word = clock ^ u64::from(std::process::id());

        let mut secret = String::with_capacity(64);
        for _ in 0..4 {
            let mut hasher = RandomState::new().build_hasher();
            hasher.write_u64(word);
            hasher.write_u64(clock);
            word = hasher.finish();
            secret.push_str(&format!("{:016x}", word));
        }
        secret
    }

    /// Create from environment variables
    ///
    /// Environment:
    /// - STORE_JWT_SECRET: Secret key for signing (min 32 chars)
    /// - STORE_USERS: Comma-separated user:password[:role] triples
    /// - STORE_ACCESS_TOKEN_TTL: Access token TTL in seconds (default 3600)
    /// - STORE_REFRESH_TOKEN_TTL: Refresh token TTL in seconds (default 604800)
    ///
    /// Without STORE_JWT_SECRET the secret is loaded from (or generated
    /// into) the `.jwt_secret` file.
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = match std::env::var("STORE_JWT_SECRET") {
            Ok(s) => s,
            Err(_) => Self::load_or_create_secret_file()?,
        };

        if secret.len() < 32 {
            return Err(AuthError::InvalidSecret(
                "STORE_JWT_SECRET must be at least 32 characters".to_string(),
            ));
        }

        let mut auth = Self::new(&secret);

        if let Ok(ttl) = std::env::var("STORE_ACCESS_TOKEN_TTL") {
            if let Ok(seconds) = ttl.parse::<i64>() {
                auth.access_token_ttl = seconds;
            }
        }

        if let Ok(ttl) = std::env::var("STORE_REFRESH_TOKEN_TTL") {
            if let Ok(seconds) = ttl.parse::<i64>() {
                auth.refresh_token_ttl = seconds;
            }
        }

        // Format: "merve:sifre123:admin,deniz:sifre456"
        // The third part is the role (optional, default: customer)
        if let Ok(users_str) = std::env::var("STORE_USERS") {
            for user_entry in users_str.split(',') {
                let parts: Vec<&str> = user_entry.trim().split(':').collect();
                if parts.len() >= 2 {
                    let username = parts[0].to_string();
                    let password = parts[1];
                    let role = if parts.len() > 2 { parts[2] } else { ROLE_CUSTOMER };

                    if let Err(e) = auth.add_user(&username, password, role) {
                        eprintln!("[Auth] Failed to add user {}: {}", username, e);
                    }
                }
            }
        }

        // Add default admin user if no users configured (development only)
        if auth.users.is_empty() {
            eprintln!("[Auth] WARNING: No users configured, adding default admin:admin");
            auth.add_user("admin", "admin", ROLE_ADMIN)?;
        }

        eprintln!("[Auth] Loaded {} users", auth.users.len());
        Ok(auth)
    }

    /// Add a user with password and role
    pub fn add_user(&mut self, username: &str, password: &str, role: &str) -> Result<(), AuthError> {
        let password_hash =
            hash(password, DEFAULT_COST).map_err(|e| AuthError::HashError(e.to_string()))?;

        self.users.insert(
            username.to_string(),
            StoreUser {
                username: username.to_string(),
                password_hash,
                role: role.to_string(),
            },
        );

        Ok(())
    }

    /// Authenticate user with username/password
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&StoreUser, AuthError> {
        let user = self
            .users
            .get(username)
            .ok_or(AuthError::InvalidCredentials)?;

        if verify(password, &user.password_hash).unwrap_or(false) {
            Ok(user)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Generate access and refresh tokens for user
    pub fn generate_tokens(&self, user: &StoreUser) -> Result<TokenPair, AuthError> {
        let access_claims = Claims::new_access(
            user.username.clone(),
            user.role.clone(),
            self.access_token_ttl,
        );

        let refresh_claims = Claims::new_refresh(user.username.clone(), self.refresh_token_ttl);

        let access_token = encode(&Header::default(), &access_claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;

        let refresh_token = encode(&Header::default(), &refresh_claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl,
        })
    }

    /// Validate a token and return claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data: TokenData<Claims> = decode(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AuthError::TokenError(e.to_string()))?;

        if token_data.claims.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Refresh access token using refresh token
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.validate_token(refresh_token)?;

        if claims.token_type != "refresh" {
            return Err(AuthError::InvalidTokenType);
        }

        // Get user to re-derive the role
        let user = self.users.get(&claims.sub).ok_or(AuthError::UserNotFound)?;

        self.generate_tokens(user)
    }

    /// Validate token from Authorization header
    /// Supports: "Bearer <token>" or just "<token>"
    pub fn validate_authorization(&self, auth_header: &str) -> Result<Claims, AuthError> {
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);
        self.validate_token(token)
    }

    /// Get user count
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Token pair response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    InvalidCredentials,
    InvalidSecret(String),
    TokenError(String),
    TokenExpired,
    InvalidTokenType,
    UserNotFound,
    HashError(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthError::InvalidSecret(msg) => write!(f, "Invalid secret: {}", msg),
            AuthError::TokenError(msg) => write!(f, "Token error: {}", msg),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::InvalidTokenType => write!(f, "Invalid token type"),
            AuthError::UserNotFound => write!(f, "User not found"),
            AuthError::HashError(msg) => write!(f, "Hash error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_auth() -> StoreAuth {
        let mut auth = StoreAuth::new("test-secret-key-that-is-at-least-32-characters-long");
        auth.add_user("merve", "sifre123", ROLE_ADMIN).unwrap();
        auth.add_user("deniz", "sifre456", ROLE_CUSTOMER).unwrap();
        auth
    }

    #[test]
    fn test_authenticate_valid_user() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "sifre123");
        assert!(user.is_ok());
        assert_eq!(user.unwrap().username, "merve");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "yanlis");
        assert!(matches!(user, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let auth = create_test_auth();
        let user = auth.authenticate("kimse", "sifre");
        assert!(matches!(user, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_generate_and_validate_tokens() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "sifre123").unwrap();
        let tokens = auth.generate_tokens(user).unwrap();

        let claims = auth.validate_token(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, "merve");
        assert_eq!(claims.token_type, "access");
        assert!(claims.is_admin());
    }

    #[test]
    fn test_customer_is_not_admin() {
        let auth = create_test_auth();
        let user = auth.authenticate("deniz", "sifre456").unwrap();
        let tokens = auth.generate_tokens(user).unwrap();

        let claims = auth.validate_token(&tokens.access_token).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_refresh_token() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "sifre123").unwrap();
        let tokens = auth.generate_tokens(user).unwrap();

        let new_tokens = auth.refresh_access_token(&tokens.refresh_token).unwrap();
        assert!(!new_tokens.access_token.is_empty());

        // The refreshed access token carries the role again
        let claims = auth.validate_token(&new_tokens.access_token).unwrap();
        assert!(claims.is_admin());
    }

    #[test]
    fn test_access_token_cannot_refresh() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "sifre123").unwrap();
        let tokens = auth.generate_tokens(user).unwrap();

        let result = auth.refresh_access_token(&tokens.access_token);
        assert!(matches!(result, Err(AuthError::InvalidTokenType)));
    }

    #[test]
    fn test_minted_secrets_are_long_and_distinct() {
        let a = StoreAuth::mint_secret();
        let b = StoreAuth::mint_secret();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn test_validate_authorization_header() {
        let auth = create_test_auth();
        let user = auth.authenticate("merve", "sifre123").unwrap();
        let tokens = auth.generate_tokens(user).unwrap();

        // With "Bearer " prefix
        let claims = auth
            .validate_authorization(&format!("Bearer {}", tokens.access_token))
            .unwrap();
        assert_eq!(claims.sub, "merve");

        // Without prefix
        let claims = auth.validate_authorization(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, "merve");
    }
}
