use super::*;

use std::collections::BTreeMap;

/// Process-local store. Ids start at 1 and are never handed out twice.
pub struct MemStorage {
    pub medium: String,
    data: BTreeMap<i64, ContactFields>,
    next_id: i64,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStorage {
    fn create(&mut self, fields: &ContactFields) -> Result<i64, AppError> {
        let id = self.next_id;
        self.next_id += 1;
        self.data.insert(id, fields.clone());
        Ok(id)
    }

    fn read(&self, id: i64) -> Result<Option<Contact>, AppError> {
        Ok(self
            .data
            .get(&id)
            .map(|fields| fields.clone().into_contact(id)))
    }

    fn read_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self
            .data
            .iter()
            .map(|(&id, fields)| fields.clone().into_contact(id))
            .collect())
    }

    fn update(&mut self, id: i64, fields: &ContactFields) -> Result<bool, AppError> {
        match self.data.get_mut(&id) {
            Some(current) => {
                *current = fields.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        Ok(self.data.remove(&id).is_some())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_delete() -> Result<(), AppError> {
        let mut store = MemStorage::new();

        let first = store.create(&ContactFields::new("Uche", "", ""))?;
        let second = store.create(&ContactFields::new("Alex", "", ""))?;
        assert_eq!((first, second), (1, 2));

        assert!(store.delete(second)?);
        let third = store.create(&ContactFields::new("Mom", "", ""))?;
        assert_eq!(third, 3);

        let ids: Vec<i64> = store.read_all()?.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        Ok(())
    }

    #[test]
    fn update_and_delete_report_missing_ids() -> Result<(), AppError> {
        let mut store = MemStorage::new();

        assert!(!store.update(9, &ContactFields::new("Ghost", "", ""))?);
        assert!(!store.delete(9)?);
        assert!(store.read(9)?.is_none());
        assert!(store.read_all()?.is_empty());
        Ok(())
    }
}
