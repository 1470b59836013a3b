mod create_product_use_case;
mod delete_product_use_case;
mod get_products_use_case;
mod product_platforms_use_case;
mod update_product_use_case;

pub use create_product_use_case::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use delete_product_use_case::{DeleteProductError, DeleteProductUseCase};
pub use get_products_use_case::{GetProductsError, GetProductsUseCase};
pub use product_platforms_use_case::{
    AddProductPlatformError, AddProductPlatformUseCase, ClearProductPlatformsError,
    ClearProductPlatformsUseCase, GetProductPlatformsError, GetProductPlatformsUseCase,
};
pub use update_product_use_case::{
    UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
};
