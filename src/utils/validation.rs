use crate::utils::error::{CartaError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartaError::invalid_argument(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CartaError::invalid_argument(
            field_name,
            "URL cannot be empty",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CartaError::invalid_argument(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(CartaError::invalid_argument(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_minimum(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(CartaError::invalid_argument(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CartaError::invalid_argument(
            field_name,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(CartaError::invalid_argument(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace_only_strings() {
        assert!(validate_non_empty_string("provider", "  \t").is_err());
        assert!(validate_non_empty_string("provider", "opentable").is_ok());
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_url("endpoint", "https://example.com/api").is_ok());
    }

    #[test]
    fn enforces_minimum_party_size() {
        assert!(validate_minimum("party_size", 0, 1).is_err());
        assert!(validate_minimum("party_size", 4, 1).is_ok());
    }
}
