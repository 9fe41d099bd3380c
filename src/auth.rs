//! App identity assertions, signing keys, and minted bearer tokens.

pub mod claims;
pub mod key;
pub mod token;

pub use claims::*;
pub use key::*;
pub use token::*;
