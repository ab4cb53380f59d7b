use crate::domain::ports::StoreSettings;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const TOTAL_PLACEHOLDER: &str = "{total}";
pub const STORE_PLACEHOLDER: &str = "{store}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub catalog: CatalogConfig,
    pub payment: PaymentConfig,
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub name: String,
    pub tagline: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "SweatNBlood".to_string(),
            tagline: "His Blood made us Stronger and Better.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub size: usize,
    pub base_price: Decimal,
    pub price_step: Decimal,
    pub price_cycle: usize,
    pub image_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: 20,
            base_price: Decimal::new(2999, 2),
            price_step: Decimal::from(10),
            price_cycle: 5,
            image_dir: "/images".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub endpoint: String,
    pub business: String,
    pub currency_code: String,
    pub item_name: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.paypal.com/cgi-bin/webscr".to_string(),
            business: "youremail@example.com".to_string(),
            currency_code: "USD".to_string(),
            item_name: "Order from SweatNBlood".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub endpoint: String,
    pub recipient: String,
    pub message_template: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://wa.me".to_string(),
            recipient: "237XXXXXXXXX".to_string(),
            message_template: concat!(
                "Hi, I'd like to pay for my {store} order ",
                "(Total: ${total}) via MTN/Orange Mobile Money."
            )
            .to_string(),
        }
    }
}

impl StoreConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${MOMO_RECIPIENT})
    ///
    /// 只比對大寫名稱，訊息範本裡的 `${total}` 不會被當成環境變數。
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| {
            StoreError::InvalidConfigValueError {
                field: "environment".to_string(),
                value: String::new(),
                reason: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("store.name", &self.store.name)?;

        validation::validate_positive_number("catalog.size", self.catalog.size, 1)?;
        validation::validate_positive_number("catalog.price_cycle", self.catalog.price_cycle, 1)?;
        validation::validate_non_negative_amount("catalog.base_price", self.catalog.base_price)?;
        validation::validate_non_negative_amount("catalog.price_step", self.catalog.price_step)?;

        validation::validate_url("payment.endpoint", &self.payment.endpoint)?;
        validation::validate_non_empty_string("payment.business", &self.payment.business)?;
        validation::validate_no_unresolved_env_var("payment.business", &self.payment.business)?;
        validation::validate_currency_code("payment.currency_code", &self.payment.currency_code)?;
        validation::validate_non_empty_string("payment.item_name", &self.payment.item_name)?;

        validation::validate_url("messaging.endpoint", &self.messaging.endpoint)?;
        validation::validate_non_empty_string("messaging.recipient", &self.messaging.recipient)?;
        validation::validate_no_unresolved_env_var(
            "messaging.recipient",
            &self.messaging.recipient,
        )?;
        validation::validate_contains_placeholder(
            "messaging.message_template",
            &self.messaging.message_template,
            TOTAL_PLACEHOLDER,
        )?;

        Ok(())
    }
}

impl StoreSettings for StoreConfig {
    fn store_name(&self) -> &str {
        &self.store.name
    }

    fn tagline(&self) -> &str {
        &self.store.tagline
    }

    fn payment_endpoint(&self) -> &str {
        &self.payment.endpoint
    }

    fn payment_business(&self) -> &str {
        &self.payment.business
    }

    fn currency_code(&self) -> &str {
        &self.payment.currency_code
    }

    fn item_name(&self) -> &str {
        &self.payment.item_name
    }

    fn messaging_endpoint(&self) -> &str {
        &self.messaging.endpoint
    }

    fn messaging_recipient(&self) -> &str {
        &self.messaging.recipient
    }

    fn message_template(&self) -> &str {
        &self.messaging.message_template
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();

        assert_eq!(config.store.name, "SweatNBlood");
        assert_eq!(config.catalog.size, 20);
        assert_eq!(config.catalog.base_price, Decimal::new(2999, 2));
        assert_eq!(config.payment.currency_code, "USD");
        assert_eq!(config.messaging.recipient, "237XXXXXXXXX");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[store]
name = "IronWorks"

[catalog]
size = 3
base_price = "10.50"
price_step = "2"

[payment]
business = "shop@ironworks.test"
currency_code = "EUR"
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store.name, "IronWorks");
        // 未設定的欄位沿用預設值
        assert_eq!(config.store.tagline, "His Blood made us Stronger and Better.");
        assert_eq!(config.catalog.size, 3);
        assert_eq!(config.catalog.base_price, Decimal::new(1050, 2));
        assert_eq!(config.catalog.price_cycle, 5);
        assert_eq!(config.payment_business(), "shop@ironworks.test");
        assert_eq!(config.currency_code(), "EUR");
        assert_eq!(config.payment_endpoint(), "https://www.paypal.com/cgi-bin/webscr");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SNB_TEST_MOMO_RECIPIENT", "237612345678");

        let toml_content = r#"
[messaging]
recipient = "${SNB_TEST_MOMO_RECIPIENT}"
message_template = "Pay ${total} please"
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.messaging.recipient, "237612345678");
        assert_eq!(config.messaging.message_template, "Pay ${total} please");

        std::env::remove_var("SNB_TEST_MOMO_RECIPIENT");
    }

    #[test]
    fn test_unset_env_var_is_left_as_is() {
        let toml_content = r#"
[payment]
business = "${SNB_TEST_NEVER_SET_VARIABLE}"
"#;

        let config = StoreConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.payment.business, "${SNB_TEST_NEVER_SET_VARIABLE}");
    }

    #[test]
    fn test_unresolved_recipient_fails_validation() {
        let business = StoreConfig::from_toml_str(
            r#"
[payment]
business = "${SNB_TEST_UNSET_PAYPAL_BUSINESS}"
"#,
        )
        .unwrap();
        let err = business.validate().unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidConfigValueError { ref field, .. } if field == "payment.business"
        ));

        let recipient = StoreConfig::from_toml_str(
            r#"
[messaging]
recipient = "${SNB_TEST_UNSET_MOMO_RECIPIENT}"
"#,
        )
        .unwrap();
        let err = recipient.validate().unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidConfigValueError { ref field, .. } if field == "messaging.recipient"
        ));
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = StoreConfig::from_toml_str(
            r#"
[payment]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_endpoint.validate().is_err());

        let bad_currency = StoreConfig::from_toml_str(
            r#"
[payment]
currency_code = "dollars"
"#,
        )
        .unwrap();
        assert!(bad_currency.validate().is_err());

        let empty_catalog = StoreConfig::from_toml_str(
            r#"
[catalog]
size = 0
"#,
        )
        .unwrap();
        assert!(empty_catalog.validate().is_err());

        let no_total = StoreConfig::from_toml_str(
            r#"
[messaging]
message_template = "Hello"
"#,
        )
        .unwrap();
        assert!(no_total.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = StoreConfig::from_toml_str("[catalog\nsize = 1").unwrap_err();
        assert!(matches!(err, StoreError::ConfigParseError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[store]
name = "FileStore"
tagline = "Loaded from disk"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = StoreConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store.name, "FileStore");
        assert_eq!(config.store.tagline, "Loaded from disk");
    }
}
