pub mod config;
pub mod modules;

pub use modules::platform;
pub use modules::product;
pub use modules::topic;
pub use modules::version;
