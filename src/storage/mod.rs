pub mod traits;
pub mod sqlite;

pub use traits::SeenRepository;
pub use sqlite::{SqliteSeenRepository, SqliteStorage};
