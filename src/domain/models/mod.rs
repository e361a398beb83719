// Domain models
// Pure Rust, no framework dependencies

pub mod user;

pub use user::User;
