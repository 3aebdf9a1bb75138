mod contact;
mod health_check;
mod helpers;

pub use contact::{ContactError, ContactPayload, send_message};
pub use health_check::health_check;
