/*
 * Responsibility
 * - POST /process request DTO
 * - validate() for shape checks before the service is called
 */
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    // Optional so a missing field becomes a 400 with our own message, not a serde rejection.
    #[serde(default)]
    pub text: Option<String>,
}

impl ProcessRequest {
    pub fn validate(&self) -> Result<&str, &'static str> {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err("text is required"),
        }
    }
}
