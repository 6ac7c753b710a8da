//! In-memory product service.

use super::Endpoint;
use crate::service::ProductService;
use crate::{DataResult, LatencyConfig, ServiceTag};
use async_trait::async_trait;
use chrono::Utc;
use dukaan_commerce::catalog::Product;
use dukaan_commerce::search::{self, FilterCriteria};
use dukaan_commerce::{CategoryId, CommerceError, ProductId};
use tokio::sync::RwLock;

pub struct MockProductService {
    endpoint: Endpoint,
    products: RwLock<Vec<Product>>,
}

impl MockProductService {
    pub fn new(products: Vec<Product>, latency: &LatencyConfig) -> Self {
        Self {
            endpoint: Endpoint::new(ServiceTag::Products, latency),
            products: RwLock::new(products),
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.endpoint.set_offline(offline);
    }

    /// Copy of the backing data.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }
}

#[async_trait]
impl ProductService for MockProductService {
    async fn get_all(&self) -> DataResult<Vec<Product>> {
        self.endpoint.call("get_all").await?;
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> DataResult<Product> {
        self.endpoint.call("get_by_id").await?;
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id).into())
    }

    async fn get_by_category(&self, category_id: CategoryId) -> DataResult<Vec<Product>> {
        self.endpoint.call("get_by_category").await?;
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn get_featured(&self) -> DataResult<Vec<Product>> {
        self.endpoint.call("get_featured").await?;
        Ok(self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str, criteria: &FilterCriteria) -> DataResult<Vec<Product>> {
        self.endpoint.call("search").await?;
        let results = search::search_products(&self.products.read().await, query, criteria);
        tracing::debug!(query, hits = results.len(), "product search");
        Ok(results)
    }

    async fn get_deals(&self, threshold: u8) -> DataResult<Vec<Product>> {
        self.endpoint.call("get_deals").await?;
        Ok(search::deals(&self.products.read().await, threshold))
    }

    async fn create(&self, mut product: Product) -> DataResult<Product> {
        self.endpoint.call("create").await?;
        let mut products = self.products.write().await;
        product.id = ProductId::next_after(products.iter().map(|p| p.id));
        product.created_at = Utc::now();
        products.push(product.clone());
        tracing::info!(id = %product.id, "product created");
        Ok(product)
    }

    async fn update(&self, id: ProductId, mut product: Product) -> DataResult<Product> {
        self.endpoint.call("update").await?;
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        product.id = id;
        *slot = product.clone();
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> DataResult<Product> {
        self.endpoint.call("delete").await?;
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        Ok(products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dukaan_commerce::search::{Availability, FilterPatch};
    use dukaan_commerce::Money;
    use dukaan_i18n::LocalizedText;

    fn service() -> MockProductService {
        let specs = [
            (1, "Smartphone X", 0, 5, 10),
            (2, "Phone Stand", 0, 0, 25),
            (3, "Lawn Suit", 1, 8, 55),
            (4, "Table Lamp", 1, 2, 75),
        ];
        let products = specs
            .into_iter()
            .map(|(id, title, featured, stock, discount)| {
                let mut p = Product::new(
                    ProductId::new(id),
                    LocalizedText::new(title, ""),
                    Money::new(1000 * id as i64),
                    stock,
                    CategoryId::new(if id <= 2 { 1 } else { 2 }),
                );
                p.featured = featured == 1;
                p.discount_percentage = discount;
                p
            })
            .collect();
        MockProductService::new(products, &LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_search_phone_in_stock() {
        let service = service();
        let all = service.search("PHONE", &FilterCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let criteria = FilterCriteria::default()
            .with(FilterPatch::default().availability(Availability::InStock));
        let in_stock = service.search("phone", &criteria).await.unwrap();
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].title.en, "Smartphone X");
    }

    #[tokio::test]
    async fn test_by_category_and_featured() {
        let service = service();
        assert_eq!(service.get_by_category(CategoryId::new(2)).await.unwrap().len(), 2);
        assert_eq!(service.get_featured().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_deals_use_strict_threshold() {
        let deals = service().get_deals(25).await.unwrap();
        let ids: Vec<u64> = deals.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_reads_return_copies() {
        let service = service();
        let mut first = service.get_by_id(ProductId::new(1)).await.unwrap();
        first.stock = 0;
        let again = service.get_by_id(ProductId::new(1)).await.unwrap();
        assert_eq!(again.stock, 5);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let service = service();
        let draft = Product::new(
            ProductId::new(0),
            LocalizedText::new("Kettle", "کیتلی"),
            Money::new(3200),
            4,
            CategoryId::new(2),
        );
        let created = service.create(draft).await.unwrap();
        assert_eq!(created.id, ProductId::new(5));

        let mut changed = created.clone();
        changed.stock = 1;
        changed.id = ProductId::new(99);
        let updated = service.update(created.id, changed).await.unwrap();
        assert_eq!(updated.id, ProductId::new(5));
        assert_eq!(updated.stock, 1);

        service.delete(ProductId::new(5)).await.unwrap();
        assert!(service
            .get_by_id(ProductId::new(5))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(service
            .update(ProductId::new(5), updated)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_offline_fails() {
        let service = service();
        service.set_offline(true);
        assert!(!service.get_all().await.unwrap_err().is_not_found());
        service.set_offline(false);
        assert!(service.get_all().await.is_ok());
    }
}
