pub mod account;
pub mod error;
pub mod message;
pub mod store;

pub use account::AccountService;
pub use error::ServiceError;
pub use message::MessageService;
