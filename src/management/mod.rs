mod auth;
mod session;

pub use auth::SessionManager;
pub use session::SessionLogError;
pub use session::SessionLogManager;
