use async_trait::async_trait;

use crate::modules::product::application::domain::entities::Product;
use crate::modules::product::application::ports::{
    incoming::use_cases::{GetProductsError, GetProductsUseCase},
    outgoing::ProductQuery,
};

#[derive(Debug, Clone)]
pub struct GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProductsUseCase for GetProductsService<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Product>, GetProductsError> {
        self.query
            .get_products()
            .await
            .map_err(|e| GetProductsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::modules::product::application::ports::outgoing::ProductQueryError;

    #[derive(Clone)]
    struct MockProductQuery {
        result: Result<Vec<Product>, ProductQueryError>,
    }

    #[async_trait]
    impl ProductQuery for MockProductQuery {
        async fn get_products(&self) -> Result<Vec<Product>, ProductQueryError> {
            self.result.clone()
        }

        async fn find_product(
            &self,
            _product_id: Uuid,
        ) -> Result<Option<Product>, ProductQueryError> {
            unimplemented!()
        }
    }

    fn product(title: &str, display_order: i32) -> Product {
        Product {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: title.to_lowercase(),
            description: "desc".to_string(),
            image: None,
            display_order,
            visible: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_products_preserves_query_order() {
        let products = vec![product("Firefox", 1), product("Thunderbird", 2)];

        let query = MockProductQuery {
            result: Ok(products),
        };
        let service = GetProductsService::new(query);

        let result = service.execute().await;

        assert!(result.is_ok());
        let returned = result.unwrap();
        assert_eq!(returned.len(), 2);
        assert_eq!(returned[0].title, "Firefox");
        assert_eq!(returned[1].title, "Thunderbird");
    }

    #[tokio::test]
    async fn get_products_query_failure() {
        let query = MockProductQuery {
            result: Err(ProductQueryError::DatabaseError("db down".to_string())),
        };
        let service = GetProductsService::new(query);

        let result = service.execute().await;

        match result {
            Err(GetProductsError::QueryFailed(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected QueryFailed error, got {:?}", other),
        }
    }
}
