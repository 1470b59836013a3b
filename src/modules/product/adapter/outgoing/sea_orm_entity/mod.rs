pub mod product_platforms;
pub mod products;
