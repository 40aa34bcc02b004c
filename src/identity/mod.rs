pub mod base;
pub mod oidc;

pub use base::{AccessToken, Account, IdentityProvider};
pub use oidc::{OidcConfig, OidcProvider};
