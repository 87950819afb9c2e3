use actix_multipart::Field;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use futures_util::TryStreamExt;
use rand::rngs::OsRng;

use crate::api::error;

lazy_static::lazy_static! {
    static ref ARGON2: Argon2<'static> = Argon2::default();
}

pub fn hash_password(password: &str) -> Result<String, error::SystemError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = ARGON2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Collect a multipart text field into a UTF-8 string.
pub async fn read_text_field(field: &mut Field) -> Result<String, error::Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) =
        field.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
    {
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8(bytes).map_err(|_| error::Error::bad_request("Form field is not valid UTF-8"))
}

/// Content type declared by a multipart part, falling back to a guess from
/// the filename extension.
pub fn declared_content_type(field: &Field, filename: &str) -> String {
    field
        .content_type()
        .map(|m| m.to_string())
        .unwrap_or_else(|| mime_guess::from_path(filename).first_or_octet_stream().to_string())
}

/// Drop a staged file that will not reach its pipeline.
pub async fn discard_staged(staged: Option<crate::storage::StagedFile>) {
    if let Some(file) = staged {
        file.cleanup().await;
    }
}

/// Form values arrive as strings; only a literal "true" counts as true.
pub fn parse_bool(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

/// Unparseable or absent integers are treated as not provided.
pub fn parse_int(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_only_accepts_literal_true() {
        assert!(parse_bool(Some("true")));
        assert!(!parse_bool(Some("false")));
        assert!(!parse_bool(Some("TRUE")));
        assert!(!parse_bool(Some("1")));
        assert!(!parse_bool(None));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Some("42")), Some(42));
        assert_eq!(parse_int(Some("-7")), Some(-7));
        assert_eq!(parse_int(Some("abc")), None);
        assert_eq!(parse_int(Some("")), None);
        assert_eq!(parse_int(None), None);
    }

    #[test]
    fn test_hash_password_produces_phc_string() {
        let hash = hash_password("secret123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, hash_password("secret123").unwrap());
    }
}
