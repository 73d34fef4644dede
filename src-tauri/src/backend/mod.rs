pub mod backend;
pub mod session;

pub use backend::{CommandHandler, FormState};
pub use session::Session;
