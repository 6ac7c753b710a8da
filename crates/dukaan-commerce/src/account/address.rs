//! Saved addresses and the single-default address book.

use crate::error::CommerceError;
use crate::ids::AddressId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an address is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}

/// A delivery address saved on a user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedAddress {
    pub id: AddressId,
    #[serde(default)]
    pub kind: AddressType,
    /// Label shown in the address list (e.g., "Home").
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedAddress {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address, self.city, self.state, self.postal_code, self.country
        )
    }
}

/// Fields for a new address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NewAddress {
    pub kind: AddressType,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub is_default: bool,
}

/// A partial address update. Unset fields are left alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AddressPatch {
    pub kind: Option<AddressType>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
}

/// A user's addresses.
///
/// At most one address is flagged default. Flagging a new default clears the
/// flag everywhere else; deleting the default promotes the first remaining
/// address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct AddressBook {
    addresses: Vec<SavedAddress>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing addresses, repairing duplicate default flags
    /// (the first flagged address wins).
    pub fn from_addresses(addresses: Vec<SavedAddress>) -> Self {
        let mut book = Self { addresses };
        if let Some(first_default) = book.addresses.iter().position(|a| a.is_default) {
            book.make_default_at(first_default);
        }
        book
    }

    pub fn addresses(&self) -> &[SavedAddress] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, id: AddressId) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.id == id)
    }

    /// The default address, if any.
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// Add an address and return it.
    pub fn add(&mut self, new: NewAddress, now: DateTime<Utc>) -> SavedAddress {
        let id = AddressId::next_after(self.addresses.iter().map(|a| a.id));
        let address = SavedAddress {
            id,
            kind: new.kind,
            name: new.name,
            address: new.address,
            city: new.city,
            state: new.state,
            country: new.country,
            postal_code: new.postal_code,
            is_default: new.is_default,
            created_at: Some(now),
            updated_at: None,
        };
        self.addresses.push(address.clone());
        if address.is_default {
            self.make_default_at(self.addresses.len() - 1);
        }
        address
    }

    /// Apply a partial update to an address.
    pub fn update(
        &mut self,
        id: AddressId,
        patch: AddressPatch,
        now: DateTime<Utc>,
    ) -> Result<SavedAddress, CommerceError> {
        let index = self.index_of(id)?;
        let address = &mut self.addresses[index];
        if let Some(kind) = patch.kind {
            address.kind = kind;
        }
        if let Some(name) = patch.name {
            address.name = name;
        }
        if let Some(line) = patch.address {
            address.address = line;
        }
        if let Some(city) = patch.city {
            address.city = city;
        }
        if let Some(state) = patch.state {
            address.state = state;
        }
        if let Some(country) = patch.country {
            address.country = country;
        }
        if let Some(postal_code) = patch.postal_code {
            address.postal_code = postal_code;
        }
        if let Some(is_default) = patch.is_default {
            address.is_default = is_default;
        }
        address.updated_at = Some(now);

        if patch.is_default == Some(true) {
            self.make_default_at(index);
        }
        Ok(self.addresses[index].clone())
    }

    /// Make an address the default.
    pub fn set_default(&mut self, id: AddressId) -> Result<SavedAddress, CommerceError> {
        let index = self.index_of(id)?;
        self.make_default_at(index);
        Ok(self.addresses[index].clone())
    }

    /// Delete an address, promoting the first remaining one if the default
    /// was removed.
    pub fn remove(&mut self, id: AddressId) -> Result<SavedAddress, CommerceError> {
        let index = self.index_of(id)?;
        let removed = self.addresses.remove(index);
        if removed.is_default {
            if let Some(first) = self.addresses.first_mut() {
                first.is_default = true;
            }
        }
        Ok(removed)
    }

    fn index_of(&self, id: AddressId) -> Result<usize, CommerceError> {
        self.addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or(CommerceError::AddressNotFound(id))
    }

    fn make_default_at(&mut self, index: usize) {
        for (i, address) in self.addresses.iter_mut().enumerate() {
            address.is_default = i == index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_address(name: &str, is_default: bool) -> NewAddress {
        NewAddress {
            name: name.to_string(),
            address: "123 Main Street".to_string(),
            city: "Karachi".to_string(),
            state: "Sindh".to_string(),
            country: "Pakistan".to_string(),
            postal_code: "75300".to_string(),
            is_default,
            ..Default::default()
        }
    }

    fn default_count(book: &AddressBook) -> usize {
        book.addresses().iter().filter(|a| a.is_default).count()
    }

    #[test]
    fn test_add_assigns_ids() {
        let mut book = AddressBook::new();
        let a = book.add(new_address("Home", true), Utc::now());
        let b = book.add(new_address("Work", false), Utc::now());
        assert_eq!(a.id, AddressId::new(1));
        assert_eq!(b.id, AddressId::new(2));
        assert_eq!(book.default_address().map(|a| a.id), Some(a.id));
    }

    #[test]
    fn test_new_default_clears_others() {
        let mut book = AddressBook::new();
        book.add(new_address("Home", true), Utc::now());
        let work = book.add(new_address("Work", true), Utc::now());
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_address().map(|a| a.id), Some(work.id));
    }

    #[test]
    fn test_set_default() {
        let mut book = AddressBook::new();
        book.add(new_address("Home", true), Utc::now());
        let work = book.add(new_address("Work", false), Utc::now());
        book.set_default(work.id).unwrap();
        assert_eq!(default_count(&book), 1);
        assert!(book.get(work.id).unwrap().is_default);
    }

    #[test]
    fn test_update_to_default_clears_others() {
        let mut book = AddressBook::new();
        book.add(new_address("Home", true), Utc::now());
        let work = book.add(new_address("Work", false), Utc::now());
        let patch = AddressPatch {
            is_default: Some(true),
            city: Some("Lahore".to_string()),
            ..Default::default()
        };
        let updated = book.update(work.id, patch, Utc::now()).unwrap();
        assert_eq!(updated.city, "Lahore");
        assert_eq!(default_count(&book), 1);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_delete_default_promotes_first() {
        let mut book = AddressBook::new();
        let home = book.add(new_address("Home", false), Utc::now());
        let work = book.add(new_address("Work", false), Utc::now());
        let other = book.add(new_address("Other", true), Utc::now());

        book.remove(other.id).unwrap();
        assert_eq!(book.default_address().map(|a| a.id), Some(home.id));

        book.remove(home.id).unwrap();
        assert_eq!(book.default_address().map(|a| a.id), Some(work.id));

        book.remove(work.id).unwrap();
        assert!(book.default_address().is_none());
    }

    #[test]
    fn test_delete_non_default_keeps_default() {
        let mut book = AddressBook::new();
        let home = book.add(new_address("Home", true), Utc::now());
        let work = book.add(new_address("Work", false), Utc::now());
        book.remove(work.id).unwrap();
        assert_eq!(book.default_address().map(|a| a.id), Some(home.id));
    }

    #[test]
    fn test_unknown_address() {
        let mut book = AddressBook::new();
        let err = book.remove(AddressId::new(5)).unwrap_err();
        assert!(err.is_not_found());
        assert!(book.set_default(AddressId::new(5)).is_err());
    }

    #[test]
    fn test_from_addresses_repairs_defaults() {
        let mut first = AddressBook::new();
        first.add(new_address("Home", false), Utc::now());
        first.add(new_address("Work", false), Utc::now());
        let mut raw = first.addresses().to_vec();
        raw.iter_mut().for_each(|a| a.is_default = true);

        let book = AddressBook::from_addresses(raw);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_address().map(|a| a.id), Some(AddressId::new(1)));
    }
}
