/// 店家名稱與收款資訊，由設定來源提供
pub trait StoreSettings {
    fn store_name(&self) -> &str;
    fn tagline(&self) -> &str;
    fn payment_endpoint(&self) -> &str;
    fn payment_business(&self) -> &str;
    fn currency_code(&self) -> &str;
    fn item_name(&self) -> &str;
    fn messaging_endpoint(&self) -> &str;
    fn messaging_recipient(&self) -> &str;
    fn message_template(&self) -> &str;
}
