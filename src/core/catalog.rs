use crate::config::toml_config::CatalogConfig;
use crate::domain::model::{Product, ProductId};
use rust_decimal::Decimal;

/// 啟動時產生、之後不再變動的商品清單
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 依設定產生商品：編號從 1 開始，價格依 price_cycle 循環遞增
    pub fn generate(store_name: &str, config: &CatalogConfig) -> Self {
        let cycle = config.price_cycle.max(1);
        let image_dir = config.image_dir.trim_end_matches('/');

        let products = (0..config.size)
            .map(|i| {
                let n = i as u32 + 1;
                let step_count = Decimal::from((i % cycle) as u64);
                Product {
                    id: ProductId(n),
                    name: format!("{} Item #{}", store_name, n),
                    price: config.base_price + config.price_step * step_count,
                    image: format!("{}/{}.jpg", image_dir, n),
                }
            })
            .collect();

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// 名稱包含搜尋字串（不分大小寫）的商品，維持原本順序
    pub fn filter(&self, search: &str) -> Vec<&Product> {
        let needle = search.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }
}
