pub mod credentials;

pub use credentials::{fingerprint, CredentialResolver, CredentialSource};
