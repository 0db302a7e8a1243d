mod object_type;
mod rule_type;

pub use object_type::*;
pub use rule_type::*;
