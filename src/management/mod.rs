mod auth;

pub use auth::Clock;
pub use auth::TokenError;
pub use auth::TokenManager;
pub use auth::TokenState;
