//! Editor support for genvars.
//!
//! A [`Generic`](genvars_core::Generic) carries no type, so the editor picks
//! one (the pin type) and edits the value through a generated struct whose
//! only field, `Value`, has that type. Generated struct descriptors are
//! cached per [`EditorSession`], keyed by pin type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod instance;
pub mod session;

pub use instance::InstanceStruct;
pub use session::{EditorSession, PinType};
