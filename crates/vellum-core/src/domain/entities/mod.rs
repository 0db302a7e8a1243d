mod entity_slim;
mod member;
mod public_access;

pub use entity_slim::*;
pub use member::*;
pub use public_access::*;
