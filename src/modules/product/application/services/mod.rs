mod create_product_service;
mod delete_product_service;
mod get_products_service;
mod product_platforms_service;
mod update_product_service;

pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use get_products_service::GetProductsService;
pub use product_platforms_service::{
    AddProductPlatformService, ClearProductPlatformsService, GetProductPlatformsService,
};
pub use update_product_service::UpdateProductService;
