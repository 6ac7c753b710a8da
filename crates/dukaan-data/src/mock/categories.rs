//! In-memory category service.

use super::Endpoint;
use crate::service::CategoryService;
use crate::{DataResult, LatencyConfig, ServiceTag};
use async_trait::async_trait;
use dukaan_commerce::catalog::Category;
use dukaan_commerce::{CategoryId, CommerceError};
use tokio::sync::RwLock;

pub struct MockCategoryService {
    endpoint: Endpoint,
    categories: RwLock<Vec<Category>>,
}

impl MockCategoryService {
    pub fn new(categories: Vec<Category>, latency: &LatencyConfig) -> Self {
        Self {
            endpoint: Endpoint::new(ServiceTag::Categories, latency),
            categories: RwLock::new(categories),
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.endpoint.set_offline(offline);
    }

    /// Copy of the backing data.
    pub async fn snapshot(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }
}

#[async_trait]
impl CategoryService for MockCategoryService {
    async fn get_all(&self) -> DataResult<Vec<Category>> {
        self.endpoint.call("get_all").await?;
        Ok(self.categories.read().await.clone())
    }

    async fn get_by_id(&self, id: CategoryId) -> DataResult<Category> {
        self.endpoint.call("get_by_id").await?;
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::CategoryNotFound(id).into())
    }

    async fn get_featured(&self) -> DataResult<Vec<Category>> {
        self.endpoint.call("get_featured").await?;
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .filter(|c| c.featured)
            .cloned()
            .collect())
    }

    async fn get_popular(&self, limit: usize) -> DataResult<Vec<Category>> {
        self.endpoint.call("get_popular").await?;
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, mut category: Category) -> DataResult<Category> {
        self.endpoint.call("create").await?;
        let mut categories = self.categories.write().await;
        category.id = CategoryId::next_after(categories.iter().map(|c| c.id));
        categories.push(category.clone());
        tracing::info!(id = %category.id, "category created");
        Ok(category)
    }

    async fn update(&self, id: CategoryId, mut category: Category) -> DataResult<Category> {
        self.endpoint.call("update").await?;
        let mut categories = self.categories.write().await;
        let slot = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CommerceError::CategoryNotFound(id))?;
        category.id = id;
        *slot = category.clone();
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> DataResult<Category> {
        self.endpoint.call("delete").await?;
        let mut categories = self.categories.write().await;
        let index = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(CommerceError::CategoryNotFound(id))?;
        Ok(categories.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dukaan_i18n::LocalizedText;

    fn service() -> MockCategoryService {
        let categories = (1..=8)
            .map(|i| {
                let mut c = Category::new(
                    CategoryId::new(i),
                    LocalizedText::new(format!("Category {i}"), ""),
                    "Tag",
                );
                c.featured = i % 2 == 0;
                c
            })
            .collect();
        MockCategoryService::new(categories, &LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_get_popular_takes_first_six() {
        let service = service();
        let popular = service.get_popular(6).await.unwrap();
        assert_eq!(popular.len(), 6);
        assert_eq!(popular[0].id, CategoryId::new(1));
    }

    #[tokio::test]
    async fn test_get_featured() {
        let featured = service().get_featured().await.unwrap();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|c| c.featured));
    }

    #[tokio::test]
    async fn test_crud() {
        let service = service();
        let created = service
            .create(Category::new(
                CategoryId::new(0),
                LocalizedText::new("Toys", "کھلونے"),
                "Gamepad2",
            ))
            .await
            .unwrap();
        assert_eq!(created.id, CategoryId::new(9));

        let mut renamed = created.clone();
        renamed.name = LocalizedText::new("Games", "کھیل");
        let updated = service.update(CategoryId::new(9), renamed).await.unwrap();
        assert_eq!(updated.name.en, "Games");

        service.delete(CategoryId::new(9)).await.unwrap();
        let err = service.get_by_id(CategoryId::new(9)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(service.delete(CategoryId::new(9)).await.unwrap_err().is_not_found());
    }
}
