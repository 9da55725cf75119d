mod auth;
mod health_check;

pub use auth::login;
pub use auth::profile;
pub use auth::refresh;
pub use auth::register;
pub use health_check::health_check;
