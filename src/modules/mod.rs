pub mod platform;
pub mod product;
pub mod topic;
pub mod version;
