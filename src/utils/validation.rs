use crate::utils::error::{Result, SampleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be non-zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.contains(' ') || host.contains('/') {
        return Err(SampleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must be a bare hostname or IP address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_token_list(field_name: &str, tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        return Err(SampleError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    for token in tokens {
        validate_non_empty_string(field_name, token)?;
    }
    Ok(())
}
