mod contact;
mod errors;
mod helpers;
mod types;

pub use contact::send_message;
pub use errors::ContactError;
pub use types::ContactPayload;
