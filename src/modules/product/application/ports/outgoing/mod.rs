mod product_platform_repository;
mod product_query;
mod product_repository;

pub use product_platform_repository::{ProductPlatformRepository, ProductPlatformRepositoryError};
pub use product_query::{ProductQuery, ProductQueryError};
pub use product_repository::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};
