pub mod config;
pub mod error;
pub mod key;
pub mod layout;
pub mod session;
pub mod signature;

pub use config::EditorConfig;
pub use error::{EditorError, ErrorKind};
pub use key::FieldKey;
pub use layout::{Layout, Position};
pub use session::{Bootstrap, generated_image_url, session_id_from_image_url};
pub use signature::SignatureSlot;
