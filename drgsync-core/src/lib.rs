pub mod errors;
pub mod models;
pub mod prompt;
pub mod session;
pub mod store;
pub mod sync;
pub mod validate;

pub use errors::*;
pub use models::*;
pub use prompt::*;
pub use session::*;
pub use store::memory::MemoryConfigStore;
pub use store::*;
pub use sync::*;
pub use validate::*;
