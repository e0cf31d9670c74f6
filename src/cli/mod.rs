pub mod command;
pub mod run;

use crate::domain::Contact;

pub use run::run_app;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Number: {}\n\
        Email: {}",
        contact.id, contact.name, contact.phone, contact.email
    )
}

pub fn listing_line(contact: &Contact) -> String {
    format!(
        "{:>4}. {:<20} {:15} {}",
        contact.id, contact.name, contact.phone, contact.email
    )
}
