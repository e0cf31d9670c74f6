pub mod contact;
pub mod manager;

use crate::prelude::*;

pub use contact::{Contact, ContactFields};
pub use manager::{ContactManager, ImportSummary};
