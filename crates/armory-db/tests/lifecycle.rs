//! Weapon lifecycle over a real SQLite database.
//!
//! Each test opens its own in-memory database, so tests are isolated and
//! can run in parallel.

use armory_core::{
    CreateWeaponRequest, ErrorKind, ListOutcome, Patch, PatchWeaponRequest, WeaponError,
    WeaponService, Weight,
};
use armory_db::{Database, DbConfig, WeaponRepository};

async fn service() -> WeaponService<WeaponRepository> {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    WeaponService::new(db.weapons())
}

fn whip() -> CreateWeaponRequest {
    let mut request = CreateWeaponRequest::new(
        "Abyssal whip",
        "A weapon from the abyss.",
        "Slash",
        "Slash",
        Weight::from_units(2),
    );
    request.required_attack_lvl = 70;
    request.attack_slash = 82;
    request.melee_strength = 82;
    request
}

fn hammer() -> CreateWeaponRequest {
    let mut request = CreateWeaponRequest::new(
        "Tzhaar-ket-om",
        "A maul crafted from obsidian.",
        "Crush",
        "Crush",
        Weight::from_thousandths(10_432),
    );
    request.required_strength_lvl = 60;
    request.attack_speed = 7;
    request.modifiable = false;
    request
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let service = service().await;

    let created = service.create(whip()).await.unwrap();
    let loaded = service.get(created.id).await.unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.attack_speed, 4);
    assert!(loaded.modifiable);
}

#[tokio::test]
async fn test_patch_weight_keeps_everything_else() {
    let service = service().await;
    let before = service.create(whip()).await.unwrap();

    let patch: PatchWeaponRequest = serde_json::from_str(r#"{ "weight": "1.5" }"#).unwrap();
    let patched = service.patch(before.id, patch).await.unwrap();

    assert_eq!(patched.weight, Weight::from_thousandths(1500));
    let mut expected = before.clone();
    expected.weight = Weight::from_thousandths(1500);
    assert_eq!(service.get(before.id).await.unwrap(), expected);
}

#[tokio::test]
async fn test_frozen_weapon_survives_every_mutation() {
    let service = service().await;
    let frozen = service.create(hammer()).await.unwrap();

    let patch = PatchWeaponRequest {
        name: Patch::Set("Obsidian maul".to_string()),
        ..Default::default()
    };
    let errors = [
        service.update(frozen.id, whip()).await.unwrap_err(),
        service.patch(frozen.id, patch).await.unwrap_err(),
        service.delete(frozen.id).await.unwrap_err(),
    ];

    for err in &errors {
        assert_eq!(err.kind(), ErrorKind::Unmodifiable);
    }
    assert_eq!(
        errors[2].to_string(),
        format!(
            "The weapon with ID #{} could not be modified. You may not delete weapons that are marked as unmodifiable.",
            frozen.id
        )
    );
    assert_eq!(service.get(frozen.id).await.unwrap(), frozen);
}

#[tokio::test]
async fn test_invalid_patch_writes_nothing() {
    let service = service().await;
    let before = service.create(whip()).await.unwrap();

    let patch = PatchWeaponRequest {
        melee_strength: Patch::Set(99),
        image_url: Patch::Set("not-a-url".to_string()),
        ..Default::default()
    };
    let err = service.patch(before.id, patch).await.unwrap_err();

    assert!(matches!(err, WeaponError::Validation(_)));
    assert_eq!(service.get(before.id).await.unwrap(), before);
}

#[tokio::test]
async fn test_update_replaces_and_can_freeze() {
    let service = service().await;
    let created = service.create(whip()).await.unwrap();

    let mut replacement = whip();
    replacement.name = "Abyssal tentacle".to_string();
    replacement.modifiable = false;
    let updated = service.update(created.id, replacement).await.unwrap();

    assert_eq!(updated.name, "Abyssal tentacle");
    assert!(!updated.modifiable);
    assert_eq!(service.get(created.id).await.unwrap(), updated);
    assert_eq!(
        service.delete(created.id).await.unwrap_err().kind(),
        ErrorKind::Unmodifiable
    );
}

#[tokio::test]
async fn test_list_and_search() {
    let service = service().await;
    service.create(whip()).await.unwrap();
    service.create(hammer()).await.unwrap();

    assert_eq!(service.list(None).await.unwrap().weapons().len(), 2);

    // Strength requirement is searched on its own
    let by_strength = service.list(Some("60")).await.unwrap();
    let names: Vec<&str> = by_strength.weapons().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Tzhaar-ket-om"]);

    let none = service.list(Some("crossbow")).await.unwrap();
    assert_eq!(
        none,
        ListOutcome::NoCriteriaMatch {
            criteria: "crossbow".to_string()
        }
    );
}

#[tokio::test]
async fn test_delete_then_missing() {
    let service = service().await;
    let created = service.create(whip()).await.unwrap();

    let removed = service.delete(created.id).await.unwrap();
    assert_eq!(removed, created);

    let err = service.get(created.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EntityNotFound);

    let err = service.delete(999).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Delete failed as a weapon with ID #999 does not exist."
    );
}

#[tokio::test]
async fn test_closed_pool_is_a_storage_failure() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let service = WeaponService::new(db.weapons());
    db.close().await;

    let err = service.create(whip()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StorageFailure);
    assert_eq!(err.kind().status_hint(), 500);
}
