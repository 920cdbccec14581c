pub mod type_category;
pub use type_category::*;

pub mod default_value;
pub use default_value::*;

pub mod raw_column;
pub use raw_column::*;

pub mod resolved_attribute;
pub use resolved_attribute::*;

pub mod attribute_dict;
pub use attribute_dict::*;
