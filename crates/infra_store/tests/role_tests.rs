//! Role administration rules

use std::sync::Arc;

use core_kernel::{PartyId, PortError};
use domain_access::{Role, RoleCode, RoleService, RoleStore};
use infra_store::InMemoryRoleStore;
use test_utils::{assert_forbidden, assert_validation, ActorFixtures};

async fn service_with_roles() -> (RoleService, Vec<Role>) {
    let roles = vec![
        Role::new(RoleCode::Captain, "Captain", "Marketplace gatekeeper"),
        Role::new(RoleCode::Buyer, "Buyer", "Importing trader"),
        Role::new(RoleCode::Seller, "Seller", "Exporting trader"),
    ];
    let store = Arc::new(InMemoryRoleStore::with_roles(roles.clone()).await);
    (RoleService::new(store), roles)
}

#[tokio::test]
async fn assignment_is_single_valued_and_destructive() {
    let (service, _) = service_with_roles().await;
    let user = PartyId::new_v7();

    service.assign_role(user, RoleCode::Buyer).await.unwrap();
    assert_eq!(service.user_role(user).await.unwrap(), Some(RoleCode::Buyer));

    service.assign_role(user, RoleCode::Surveyor).await.unwrap();
    assert_eq!(
        service.user_role(user).await.unwrap(),
        Some(RoleCode::Surveyor)
    );
}

#[tokio::test]
async fn gatekeeping_role_record_is_immutable() {
    let (service, roles) = service_with_roles().await;
    let captain_role = &roles[0];
    let buyer_role = &roles[1];

    assert_forbidden(
        service
            .update_role(captain_role.id, "Boss".into(), "renamed".into())
            .await,
    );
    assert_forbidden(service.delete_role(captain_role.id).await);

    // other roles stay editable
    let updated = service
        .update_role(buyer_role.id, "Importer".into(), "renamed".into())
        .await
        .unwrap();
    assert_eq!(updated.display_name, "Importer");
    assert_eq!(updated.version, buyer_role.version + 1);
}

#[tokio::test]
async fn captains_leave_only_through_demotion() {
    let (service, _) = service_with_roles().await;
    let user = PartyId::new_v7();

    service.assign_role(user, RoleCode::Captain).await.unwrap();
    assert_forbidden(service.assign_role(user, RoleCode::Buyer).await);

    // demotion requires an acting captain and a non-gatekeeping target role
    assert_forbidden(
        service
            .demote_user(ActorFixtures::buyer(), user, RoleCode::Buyer)
            .await,
    );
    assert_validation(
        service
            .demote_user(ActorFixtures::captain(), user, RoleCode::Captain)
            .await,
    );

    service
        .demote_user(ActorFixtures::captain(), user, RoleCode::Logistics)
        .await
        .unwrap();
    assert_eq!(
        service.user_role(user).await.unwrap(),
        Some(RoleCode::Logistics)
    );
}

#[tokio::test]
async fn demoting_a_non_captain_is_a_validation_error() {
    let (service, _) = service_with_roles().await;
    let user = PartyId::new_v7();
    service.assign_role(user, RoleCode::Seller).await.unwrap();

    assert_validation(
        service
            .demote_user(ActorFixtures::captain(), user, RoleCode::Buyer)
            .await,
    );
}

#[tokio::test]
async fn role_records_are_inserted_once_and_found_by_code() {
    let store = InMemoryRoleStore::new();
    let role = Role::new(RoleCode::Surveyor, "Surveyor", "Inspection party");

    store.insert_role(role.clone()).await.unwrap();
    let err = store.insert_role(role.clone()).await.unwrap_err();
    assert!(matches!(err, PortError::Conflict { .. }));

    let found = store.find_by_code(RoleCode::Surveyor).await.unwrap();
    assert_eq!(found.map(|found| found.id), Some(role.id));
    assert!(store.find_by_code(RoleCode::Insurer).await.unwrap().is_none());
}
