//! In-memory user service.

use super::Endpoint;
use crate::service::UserService;
use crate::{DataResult, LatencyConfig, ServiceTag};
use async_trait::async_trait;
use chrono::Utc;
use dukaan_commerce::account::{
    Acknowledgement, AddressPatch, NewAddress, PreferencesPatch, ProfilePatch, SavedAddress,
    UserProfile,
};
use dukaan_commerce::checkout::OrderSummary;
use dukaan_commerce::AddressId;
use tokio::sync::RwLock;

pub struct MockUserService {
    endpoint: Endpoint,
    user: RwLock<UserProfile>,
    history: Vec<OrderSummary>,
}

impl MockUserService {
    pub fn new(user: UserProfile, history: Vec<OrderSummary>, latency: &LatencyConfig) -> Self {
        Self {
            endpoint: Endpoint::new(ServiceTag::Users, latency),
            user: RwLock::new(user),
            history,
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_offline(&self, offline: bool) {
        self.endpoint.set_offline(offline);
    }

    /// Copy of the backing data.
    pub async fn snapshot(&self) -> UserProfile {
        self.user.read().await.clone()
    }
}

#[async_trait]
impl UserService for MockUserService {
    async fn get_profile(&self) -> DataResult<UserProfile> {
        self.endpoint.call("get_profile").await?;
        Ok(self.user.read().await.clone())
    }

    async fn update_profile(&self, patch: ProfilePatch) -> DataResult<UserProfile> {
        self.endpoint.call("update_profile").await?;
        let mut user = self.user.write().await;
        user.apply(patch, Utc::now());
        Ok(user.clone())
    }

    async fn update_preferences(&self, patch: PreferencesPatch) -> DataResult<UserProfile> {
        self.endpoint.call("update_preferences").await?;
        let mut user = self.user.write().await;
        user.preferences.apply(patch);
        Ok(user.clone())
    }

    async fn add_address(&self, address: NewAddress) -> DataResult<SavedAddress> {
        self.endpoint.call("add_address").await?;
        let mut user = self.user.write().await;
        Ok(user.addresses.add(address, Utc::now()))
    }

    async fn update_address(
        &self,
        id: AddressId,
        patch: AddressPatch,
    ) -> DataResult<SavedAddress> {
        self.endpoint.call("update_address").await?;
        let mut user = self.user.write().await;
        Ok(user.addresses.update(id, patch, Utc::now())?)
    }

    async fn delete_address(&self, id: AddressId) -> DataResult<SavedAddress> {
        self.endpoint.call("delete_address").await?;
        let mut user = self.user.write().await;
        Ok(user.addresses.remove(id)?)
    }

    async fn set_default_address(&self, id: AddressId) -> DataResult<SavedAddress> {
        self.endpoint.call("set_default_address").await?;
        let mut user = self.user.write().await;
        Ok(user.addresses.set_default(id)?)
    }

    async fn change_password(&self, _current: &str, _new: &str) -> DataResult<Acknowledgement> {
        self.endpoint.call("change_password").await?;
        Ok(Acknowledgement::ok("Password changed successfully"))
    }

    async fn request_password_reset(&self, email: &str) -> DataResult<Acknowledgement> {
        self.endpoint.call("request_password_reset").await?;
        tracing::debug!(email, "password reset requested");
        Ok(Acknowledgement::ok("Password reset email sent"))
    }

    async fn delete_account(&self) -> DataResult<Acknowledgement> {
        self.endpoint.call("delete_account").await?;
        Ok(Acknowledgement::ok("Account deleted successfully"))
    }

    async fn update_last_login(&self) -> DataResult<UserProfile> {
        self.endpoint.call("update_last_login").await?;
        let mut user = self.user.write().await;
        user.last_login = Some(Utc::now());
        Ok(user.clone())
    }

    async fn get_order_history(&self) -> DataResult<Vec<OrderSummary>> {
        self.endpoint.call("get_order_history").await?;
        Ok(self.history.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::seed;
    use dukaan_i18n::Language;

    fn service() -> MockUserService {
        MockUserService::new(
            seed::user().unwrap(),
            seed::order_history(),
            &LatencyConfig::none(),
        )
    }

    #[tokio::test]
    async fn test_profile() {
        let user = service().get_profile().await.unwrap();
        assert_eq!(user.email, "ahmed@example.com");
        assert_eq!(user.name.get(Language::Ur), "احمد علی");
        assert_eq!(user.addresses.len(), 1);
    }

    #[tokio::test]
    async fn test_address_default_invariant() {
        let service = service();
        let office = service
            .add_address(NewAddress {
                name: "Office".into(),
                address: "Plot 9, Shahrah-e-Faisal".into(),
                city: "Karachi".into(),
                state: "Sindh".into(),
                country: "Pakistan".into(),
                postal_code: "75350".into(),
                is_default: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(office.id, AddressId::new(2));

        let user = service.get_profile().await.unwrap();
        assert_eq!(user.addresses.default_address().map(|a| a.id), Some(office.id));
        assert!(!user.addresses.get(AddressId::new(1)).unwrap().is_default);

        service.delete_address(office.id).await.unwrap();
        let user = service.get_profile().await.unwrap();
        assert_eq!(
            user.addresses.default_address().map(|a| a.id),
            Some(AddressId::new(1))
        );
        assert!(service
            .set_default_address(office.id)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_preferences_and_login() {
        let service = service();
        let user = service
            .update_preferences(PreferencesPatch {
                language: Some(Language::Ur),
                newsletter: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(user.preferences.language, Language::Ur);
        assert!(!user.preferences.newsletter);

        let before = service.get_profile().await.unwrap().last_login;
        let after = service.update_last_login().await.unwrap().last_login;
        assert!(after > before);
    }

    #[tokio::test]
    async fn test_noop_account_actions() {
        let service = service();
        assert!(service.change_password("old", "new").await.unwrap().success);
        assert!(service.request_password_reset("a@b.pk").await.unwrap().success);
        assert!(service.delete_account().await.unwrap().success);
        assert_eq!(service.get_profile().await.unwrap().email, "ahmed@example.com");
    }

    #[tokio::test]
    async fn test_order_history() {
        let history = service().get_order_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].code, "ORD-001");
        assert_eq!(history[1].total.rupees(), 1800);
    }
}
