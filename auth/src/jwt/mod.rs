pub mod claims;
pub mod codec;
pub mod errors;
pub mod key;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use errors::SigningKeyError;
pub use errors::TokenError;
pub use key::SigningKey;
