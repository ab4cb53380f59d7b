use crate::config::toml_config::{STORE_PLACEHOLDER, TOTAL_PLACEHOLDER};
use crate::domain::ports::StoreSettings;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// 與瀏覽器 encodeURIComponent 相同：只保留 A-Z a-z 0-9 - _ . ! ~ * ' ( )
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLinks {
    pub payment: String,
    pub messaging: String,
}

/// 付款轉址連結：cmd / business / currency_code / amount / item_name
pub fn payment_url<S: StoreSettings + ?Sized>(settings: &S, total: &str) -> String {
    let params = [
        ("cmd", "_xclick"),
        ("business", settings.payment_business()),
        ("currency_code", settings.currency_code()),
        ("amount", total),
        ("item_name", settings.item_name()),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", settings.payment_endpoint(), query)
}

/// 單次掃描替換 {store} 與 {total}；代入的文字不會再被替換
pub fn payment_message<S: StoreSettings + ?Sized>(settings: &S, total: &str) -> String {
    let substitutions = [
        (STORE_PLACEHOLDER, settings.store_name()),
        (TOTAL_PLACEHOLDER, total),
    ];

    let mut message = String::new();
    let mut rest = settings.message_template();
    loop {
        let next = substitutions
            .iter()
            .filter_map(|(placeholder, value)| {
                rest.find(*placeholder).map(|at| (at, *placeholder, *value))
            })
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, placeholder, value)) => {
                message.push_str(&rest[..at]);
                message.push_str(value);
                rest = &rest[at + placeholder.len()..];
            }
            None => {
                message.push_str(rest);
                return message;
            }
        }
    }
}

/// 通訊軟體深層連結：收件人放在路徑，訊息整段編碼成 text 參數
pub fn messaging_url<S: StoreSettings + ?Sized>(settings: &S, total: &str) -> String {
    format!(
        "{}/{}?text={}",
        settings.messaging_endpoint().trim_end_matches('/'),
        encode_component(settings.messaging_recipient()),
        encode_component(&payment_message(settings, total))
    )
}

pub fn build_links<S: StoreSettings + ?Sized>(settings: &S, total: &str) -> CheckoutLinks {
    CheckoutLinks {
        payment: payment_url(settings, total),
        messaging: messaging_url(settings, total),
    }
}
