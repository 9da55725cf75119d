/// In-memory state
///
/// Volatile, process-lifetime stores. Both are explicitly constructed so a
/// test (or a second server instance) gets fully isolated state.

mod refresh_tokens;
mod users;

pub use refresh_tokens::RefreshTokenRegistry;
pub use users::User;
pub use users::UserStore;
