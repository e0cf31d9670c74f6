use super::*;

use tracing::{info, warn};

/// Entry point for every contact operation. Reads and writes go straight
/// through to the owned store, nothing is cached here.
pub struct ContactManager {
    pub storage: Box<dyn ContactStore>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: Vec<Contact>,
    pub skipped: usize,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self, AppError> {
        Ok(Self::new(open_storage(config)?))
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Contact, AppError> {
        let fields = ContactFields::new(name, phone, email);

        if fields.is_blank() {
            return Err(AppError::Validation(
                "At least one of name, phone or email must be provided".to_string(),
            ));
        }

        let id = self.storage.create(&fields)?;
        info!(id, medium = self.storage.get_medium(), "contact added");

        Ok(fields.into_contact(id))
    }

    pub fn edit_contact(
        &mut self,
        id: i64,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Contact, AppError> {
        let fields = ContactFields::new(name, phone, email);

        if !self.storage.update(id, &fields)? {
            return Err(AppError::contact_not_found(id));
        }
        info!(id, "contact updated");

        Ok(fields.into_contact(id))
    }

    pub fn delete_contact(&mut self, id: i64) -> Result<(), AppError> {
        if !self.storage.delete(id)? {
            return Err(AppError::contact_not_found(id));
        }
        info!(id, "contact deleted");
        Ok(())
    }

    pub fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.read_all()
    }

    pub fn get_contact(&self, id: i64) -> Result<Contact, AppError> {
        self.storage
            .read(id)?
            .ok_or_else(|| AppError::contact_not_found(id))
    }

    /// Add every record through `add_contact`. Blank records are skipped,
    /// any other failure stops the import.
    pub fn import_contacts(
        &mut self,
        records: Vec<ContactFields>,
    ) -> Result<ImportSummary, AppError> {
        let mut summary = ImportSummary::default();

        for (row, record) in records.into_iter().enumerate() {
            match self.add_contact(&record.name, &record.phone, &record.email) {
                Ok(contact) => summary.imported.push(contact),
                Err(AppError::Validation(reason)) => {
                    warn!(row = row + 1, %reason, "skipping blank record");
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}
