pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}

pub fn validate_non_zero(value: u64, field: &str) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{field} must be greater than zero"));
    }
    Ok(())
}
