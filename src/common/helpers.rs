// Helper functions for safe logging

use serde_json::Value;

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Body fields that never reach the logs.
pub const SENSITIVE_FIELDS: &[&str] = &["password", "accessToken", "refreshToken"];

/// Replaces sensitive fields anywhere in a JSON document with `"***"`.
pub fn redact_sensitive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if SENSITIVE_FIELDS.contains(&key.as_str()) {
                    *field = Value::String("***".to_string());
                } else {
                    redact_sensitive(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_sensitive),
        _ => {}
    }
}
