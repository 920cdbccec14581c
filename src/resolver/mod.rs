pub mod resolver_config;
pub use resolver_config::*;

pub mod attribute_resolver;
pub use attribute_resolver::*;
