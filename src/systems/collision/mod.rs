//! Collision detection and response.

mod contact;
mod narrow;
mod narrow3d;
mod resolve;

pub use contact::Contact;
pub use narrow::{collect_contacts, detect_pair};
pub use resolve::resolve_contact;
