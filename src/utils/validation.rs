use crate::utils::error::{Result, ServiceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_address(field_name: &str, address: &str) -> Result<()> {
    if address.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Bind address cannot be empty".to_string(),
        });
    }

    if address.contains(char::is_whitespace) || address.contains('\0') {
        return Err(ServiceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Bind address contains whitespace or null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(ServiceError::InvalidConfigValue {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be nonzero".to_string(),
        });
    }
    Ok(())
}
