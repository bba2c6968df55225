use async_trait::async_trait;
use models::Product;
use tracing::instrument;

use super::{BackendClient, ProductFetcher};
use crate::errors::ServiceError;

/// Client for `GET {base}/{productId}` on the product service.
#[derive(Clone, Debug)]
pub struct ProductClient {
    backend: BackendClient,
}

impl ProductClient {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn product_url(&self, product_id: i32) -> String {
        format!("{}/{}", self.backend.base_url(), product_id)
    }

    /// `POST /product`; no event publishing exists behind it yet.
    pub async fn create(&self, _body: &Product) -> Result<Product, ServiceError> {
        Err(ServiceError::not_implemented("createProduct"))
    }

    /// `DELETE /product/{productId}`; no event publishing exists behind it yet.
    pub async fn delete(&self, _product_id: i32) -> Result<(), ServiceError> {
        Err(ServiceError::not_implemented("deleteProduct"))
    }
}

#[async_trait]
impl ProductFetcher for ProductClient {
    #[instrument(skip(self), fields(backend = "product"))]
    async fn fetch(&self, product_id: i32) -> Result<Product, ServiceError> {
        let url = self.product_url(product_id);
        self.backend.get_json::<Product>(&url).await
    }
}
