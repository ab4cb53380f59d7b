use crate::config::StoreConfig;
use crate::core::cart::{format_amount, Cart};
use crate::core::catalog::Catalog;
use crate::core::checkout::{build_links, CheckoutLinks};
use crate::core::panels::{Language, Panel, PanelState};
use crate::domain::model::{CartLine, Product, ProductId};
use crate::domain::ports::StoreSettings;
use crate::utils::error::{Result, StoreError};
use serde::Serialize;

/// 使用者的一次操作；一次套用一個，套用完才處理下一個
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Search(String),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    OpenCart,
    CloseCart,
    TogglePanel(Panel),
    SelectLanguage(Language),
}

/// 一個瀏覽工作階段的全部狀態；結束即丟棄
pub struct Storefront<S: StoreSettings> {
    settings: S,
    catalog: Catalog,
    cart: Cart,
    search: String,
    cart_open: bool,
    panels: PanelState,
    language: Language,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub store: &'a str,
    pub search: &'a str,
    pub language: Language,
    pub cart_open: bool,
    pub panels: PanelState,
    pub products: Vec<&'a Product>,
    pub cart: &'a [CartLine],
    pub total: String,
    pub checkout: Option<CheckoutLinks>,
}

impl Storefront<StoreConfig> {
    pub fn from_config(config: StoreConfig) -> Self {
        let catalog = Catalog::generate(&config.store.name, &config.catalog);
        tracing::info!(
            "🛍️ Catalog ready: {} products for {}",
            catalog.len(),
            config.store.name
        );
        Self::new(config, catalog)
    }
}

impl<S: StoreSettings> Storefront<S> {
    pub fn new(settings: S, catalog: Catalog) -> Self {
        Self {
            settings,
            catalog,
            cart: Cart::new(),
            search: String::new(),
            cart_open: false,
            panels: PanelState::default(),
            language: Language::default(),
        }
    }

    pub fn apply(&mut self, event: StoreEvent) -> Result<()> {
        tracing::debug!("Applying event: {:?}", event);

        match event {
            StoreEvent::Search(term) => {
                self.search = term;
            }
            StoreEvent::AddToCart(id) => {
                let product = self.catalog.get(id).ok_or_else(|| {
                    tracing::warn!("Attempted to add unknown product {}", id);
                    StoreError::UnknownProduct { id: id.0 }
                })?;
                self.cart.add_to_cart(product);
                tracing::debug!(
                    "Cart now has {} lines, total {}",
                    self.cart.line_count(),
                    self.cart.total()
                );
            }
            StoreEvent::RemoveFromCart(id) => match self.cart.remove_from_cart(id) {
                Some(line) => tracing::debug!("Removed {} × {}", line.quantity, line.name),
                None => tracing::warn!("Product {} was not in the cart, nothing removed", id),
            },
            StoreEvent::OpenCart => self.cart_open = true,
            StoreEvent::CloseCart => self.cart_open = false,
            StoreEvent::TogglePanel(panel) => {
                let open = self.panels.toggle(panel);
                tracing::debug!("Panel {:?} open: {}", panel, open);
            }
            StoreEvent::SelectLanguage(language) => self.language = language,
        }

        Ok(())
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.search)
    }

    pub fn total(&self) -> String {
        format_amount(self.cart.total_amount())
    }

    /// 購物車有東西時才提供結帳連結
    pub fn checkout_links(&self) -> Option<CheckoutLinks> {
        if self.cart.is_empty() {
            return None;
        }
        Some(build_links(&self.settings, &self.total()))
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            store: self.settings.store_name(),
            search: &self.search,
            language: self.language,
            cart_open: self.cart_open,
            panels: self.panels,
            products: self.visible_products(),
            cart: self.cart.lines(),
            total: self.total(),
            checkout: self.checkout_links(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront<StoreConfig> {
        Storefront::from_config(StoreConfig::default())
    }

    #[test]
    fn test_starts_empty_and_closed() {
        let store = storefront();
        assert!(store.cart().is_empty());
        assert!(!store.is_cart_open());
        assert_eq!(store.panels(), &PanelState::default());
        assert_eq!(store.language(), Language::English);
        assert_eq!(store.visible_products().len(), 20);
        assert_eq!(store.total(), "0.00");
    }

    #[test]
    fn test_add_unknown_product_is_rejected() {
        let mut store = storefront();
        let err = store.apply(StoreEvent::AddToCart(ProductId(0))).unwrap_err();
        assert!(matches!(err, StoreError::UnknownProduct { id: 0 }));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_absent_product_is_not_an_error() {
        let mut store = storefront();
        assert!(store.apply(StoreEvent::RemoveFromCart(ProductId(5))).is_ok());
    }

    #[test]
    fn test_search_narrows_visible_products() {
        let mut store = storefront();
        store.apply(StoreEvent::Search("ITEM #2".to_string())).unwrap();
        let ids: Vec<u32> = store.visible_products().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [2, 20]);

        store.apply(StoreEvent::Search(String::new())).unwrap();
        assert_eq!(store.visible_products().len(), 20);
    }

    #[test]
    fn test_search_does_not_touch_cart() {
        let mut store = storefront();
        store.apply(StoreEvent::AddToCart(ProductId(3))).unwrap();
        store.apply(StoreEvent::Search("nothing matches".to_string())).unwrap();

        assert!(store.visible_products().is_empty());
        assert_eq!(store.cart().line_count(), 1);
    }

    #[test]
    fn test_checkout_links_only_for_non_empty_cart() {
        let mut store = storefront();
        assert!(store.checkout_links().is_none());

        store.apply(StoreEvent::AddToCart(ProductId(1))).unwrap();
        let links = store.checkout_links().unwrap();
        assert!(links.payment.contains("amount=29.99"));
        assert!(links.messaging.starts_with("https://wa.me/237XXXXXXXXX?text="));

        store.apply(StoreEvent::RemoveFromCart(ProductId(1))).unwrap();
        assert!(store.checkout_links().is_none());
    }

    #[test]
    fn test_drawer_panels_and_language() {
        let mut store = storefront();
        store.apply(StoreEvent::OpenCart).unwrap();
        store.apply(StoreEvent::TogglePanel(Panel::Help)).unwrap();
        store.apply(StoreEvent::SelectLanguage(Language::German)).unwrap();

        assert!(store.is_cart_open());
        assert!(store.panels().help);
        assert_eq!(store.language(), Language::German);

        store.apply(StoreEvent::CloseCart).unwrap();
        store.apply(StoreEvent::TogglePanel(Panel::Help)).unwrap();
        assert!(!store.is_cart_open());
        assert!(!store.panels().help);
    }
}
