pub mod traits;
pub mod email;
pub mod telegram;
pub mod registry;

pub use traits::Notifier;
pub use email::EmailNotifier;
pub use telegram::TelegramNotifier;
pub use registry::NotifierRegistry;
