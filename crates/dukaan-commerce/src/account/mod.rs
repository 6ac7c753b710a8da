//! Account module.
//!
//! Contains the user profile, preferences, and address book.

mod address;
mod profile;

pub use address::{AddressBook, AddressPatch, AddressType, NewAddress, SavedAddress};
pub use profile::{
    Acknowledgement, NotificationPreferences, Preferences, PreferencesPatch, ProfilePatch,
    UserProfile,
};
