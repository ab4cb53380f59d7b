use crate::utils::error::{Result, StoreError};
use regex::Regex;
use rust_decimal::Decimal;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> StoreError {
    StoreError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                // 之後會直接接上 ?query，所以基底本身不能帶 query 或 fragment
                if url.query().is_some() || url.fragment().is_some() {
                    return Err(invalid(
                        field_name,
                        url_str,
                        "URL must not carry a query string or fragment",
                    ));
                }
                Ok(())
            }
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid(field_name, value, "Amount cannot be negative"));
    }
    Ok(())
}

/// ISO 4217 形式：三個大寫字母
pub fn validate_currency_code(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Z]{3}$").map_err(|e| invalid(field_name, value, e.to_string()))?;
    if !re.is_match(value) {
        return Err(invalid(
            field_name,
            value,
            "Currency code must be three upper-case letters",
        ));
    }
    Ok(())
}

pub fn validate_contains_placeholder(
    field_name: &str,
    value: &str,
    placeholder: &str,
) -> Result<()> {
    if !value.contains(placeholder) {
        return Err(invalid(
            field_name,
            value,
            format!("Template must contain the {} placeholder", placeholder),
        ));
    }
    Ok(())
}

/// 環境變數沒設定時 `${VAR}` 會原樣留下，不能拿來當收款對象
pub fn validate_no_unresolved_env_var(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"\$\{[A-Z_][A-Z0-9_]*\}")
        .map_err(|e| invalid(field_name, value, e.to_string()))?;
    if let Some(found) = re.find(value) {
        return Err(invalid(
            field_name,
            value,
            format!("Environment variable {} is not set", found.as_str()),
        ));
    }
    Ok(())
}
