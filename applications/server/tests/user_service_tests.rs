/// User service tests
/// Checks that every service call reaches the gateway, including delete
mod common;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use common::{create_test_service, fixtures};
use roster_core::{NewUser, RosterError, User, UserGateway, UserId};
use roster_server::{services::UserService, ServerError};
use std::sync::{Arc, Mutex};

/// Gateway that records deletes and fails on demand
#[derive(Default)]
struct RecordingGateway {
    users: Mutex<Vec<User>>,
    deleted: Mutex<Vec<UserId>>,
    fail: bool,
}

#[async_trait]
impl UserGateway for RecordingGateway {
    async fn save(&self, user: NewUser) -> roster_core::Result<User> {
        if self.fail {
            return Err(RosterError::storage("store offline"));
        }
        let user = user.prepare_for_insert(Utc::now());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> roster_core::Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.id == id)
            .cloned())
    }

    async fn find_all(&self) -> roster_core::Result<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: &UserId) -> roster_core::Result<()> {
        self.deleted.lock().unwrap().push(id.clone());
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }
}

fn ann() -> NewUser {
    NewUser::new(
        Some(fixtures::ANN_NAME.to_string()),
        Some(fixtures::ANN_EMAIL.to_string()),
    )
}

#[tokio::test]
async fn test_delete_reaches_gateway() {
    let gateway = Arc::new(RecordingGateway::default());
    let service = UserService::new(gateway.clone());

    let user = service.create_user(ann()).await.unwrap();
    service.delete(&user.id).await.unwrap();

    assert_eq!(*gateway.deleted.lock().unwrap(), vec![user.id.clone()]);
    assert_eq!(service.find_by_id(&user.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_gateway_failure_propagates() {
    let gateway = Arc::new(RecordingGateway {
        fail: true,
        ..RecordingGateway::default()
    });
    let service = UserService::new(gateway);

    let result = service.create_user(ann()).await;

    assert!(matches!(
        result,
        Err(ServerError::Database(RosterError::Storage(_)))
    ));
}

#[tokio::test]
async fn test_create_and_find_with_sqlite() {
    let (service, _temp_dir) = create_test_service().await;

    let created = service.create_user(ann()).await.unwrap();
    let fetched = service.find_by_id(&created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_create_overwrites_past_created_at() {
    let (service, _temp_dir) = create_test_service().await;
    let past = Utc.with_ymd_and_hms(2010, 6, 1, 0, 0, 0).unwrap();

    let created = service
        .create_user(NewUser {
            created_at: Some(past),
            ..ann()
        })
        .await
        .unwrap();

    assert!(created.created_at > past);
    assert!(Utc::now() - created.created_at < chrono::Duration::minutes(1));
}

#[tokio::test]
async fn test_find_missing_is_none() {
    let (service, _temp_dir) = create_test_service().await;

    assert_eq!(service.find_by_id(&UserId::generate()).await.unwrap(), None);
}

#[tokio::test]
async fn test_find_all_and_delete_with_sqlite() {
    let (service, _temp_dir) = create_test_service().await;

    let first = service.create_user(ann()).await.unwrap();
    let second = service.create_user(ann()).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(service.find_all().await.unwrap().len(), 2);

    service.delete(&first.id).await.unwrap();
    assert_eq!(service.find_all().await.unwrap(), vec![second]);
}
