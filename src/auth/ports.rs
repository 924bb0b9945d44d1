use crate::auth::domain::{AuthResult, NewUserRecord, UserIdentity, UserRecord};
use async_trait::async_trait;

/// One-way password transform. Implementations must salt per call and
/// verify in time independent of where a mismatch occurs.
pub trait CredentialHasher: Send + Sync {
    /// 平文パスワードを保存可能なハッシュへ変換
    fn hash(&self, plaintext: &str) -> AuthResult<String>;

    /// Returns `Ok(false)` for a non-matching password; an error only
    /// means the stored hash itself is unusable.
    fn verify(&self, plaintext: &str, stored: &str) -> AuthResult<bool>;

    /// Burns a full hash-and-verify cycle against a throwaway password.
    /// Called on lookup misses so a missing account costs the same as a
    /// wrong password. Always returns false.
    fn dummy_verify(&self, plaintext: &str) -> bool;
}

/// Claims carried by an issued token, recoverable without a store
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: String,
    pub email: String,
    pub token_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Issues and verifies the session credential returned by sign-up and
/// sign-in. Tokens must be unique per issuance, time-bound, and not
/// forgeable without the server-held secret.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &UserIdentity) -> AuthResult<String>;

    /// トークンの検証（署名・有効期限・発行者）
    fn verify(&self, token: &str) -> AuthResult<TokenClaims>;
}

/// Outbound dependency on the user store. The store owns email
/// uniqueness: `insert_one` must fail with [`AuthError::DuplicateEmail`]
/// on a taken email, so callers never need a check-then-insert.
///
/// [`AuthError::DuplicateEmail`]: crate::auth::domain::AuthError::DuplicateEmail
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists the record and returns it with the store-assigned id.
    async fn insert_one(&self, record: NewUserRecord) -> AuthResult<UserRecord>;

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<UserRecord>>;
}
