//! Authentication module
//!
//! Handles JWT token generation/validation, password hashing,
//! and identity resolution against the user repository.

mod claims;
mod jwt;
mod password;
mod resolver;
mod user;

pub use claims::Claims;
pub use claims::TokenScope;
pub use jwt::generate_access_token;
pub use jwt::generate_email_token;
pub use jwt::generate_refresh_token;
pub use jwt::generate_token;
pub use jwt::validate_email_token;
pub use jwt::validate_token;
pub use password::hash_password;
pub use password::hash_password_with_cost;
pub use password::verify_password;
pub use resolver::resolve_current_user;
pub use user::Role;
pub use user::User;
pub use user::UserRepository;
