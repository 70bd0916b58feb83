//! Integration tests for the luggage, storeroom and audit-log repositories.
//!
//! Covers:
//! - Retrieval-code lookup visibility (live rows only)
//! - Tenant scoping through the owning storeroom
//! - Row locking by code across tenants
//! - Occupancy counts
//! - Audit trail paging order

use bellhop_core::luggage::{EditableFields, STATUS_RETRIEVED, STATUS_STORED};
use bellhop_core::types::{DbId, HotelId};
use bellhop_db::models::luggage::CreateLuggage;
use bellhop_db::models::storeroom::CreateStoreroom;
use bellhop_db::repositories::{AuditLogRepo, LuggageRepo, StoreroomRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn storeroom(pool: &PgPool, hotel_id: HotelId, capacity: i32) -> DbId {
    let input = CreateStoreroom {
        name: format!("Room for hotel {hotel_id}"),
        location: Some("Basement".to_string()),
        capacity,
        is_active: None,
    };
    StoreroomRepo::create(pool, hotel_id, &input)
        .await
        .expect("storeroom creation should succeed")
        .id
}

fn item(storeroom_id: DbId, guest: &str, code: &str) -> CreateLuggage {
    CreateLuggage {
        storeroom_id,
        guest_name: guest.to_string(),
        staff_name: "desk".to_string(),
        contact_phone: None,
        contact_email: None,
        description: Some("suitcase".to_string()),
        quantity: 1,
        special_notes: None,
        photo_urls: vec!["/uploads/2026/01/a.jpg".to_string()],
        photo_url: Some("/uploads/2026/01/a.jpg".to_string()),
        retrieval_code: code.to_string(),
    }
}

async fn insert(pool: &PgPool, input: &CreateLuggage) -> DbId {
    let mut conn = pool.acquire().await.unwrap();
    LuggageRepo::insert(&mut conn, input).await.unwrap().id
}

// ---------------------------------------------------------------------------
// Code lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_code_in_use_sees_live_rows_only(pool: PgPool) {
    let room = storeroom(&pool, 1, 10).await;
    assert!(!LuggageRepo::code_in_use(&pool, "123456").await.unwrap());

    let id = insert(&pool, &item(room, "Ada", "123456")).await;
    assert!(LuggageRepo::code_in_use(&pool, "123456").await.unwrap());

    assert!(LuggageRepo::soft_delete(&pool, id, 1).await.unwrap());
    assert!(
        !LuggageRepo::code_in_use(&pool, "123456").await.unwrap(),
        "a code whose rows are all deleted is free again"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_code_in_use_ignores_uncommitted_rows(pool: PgPool) {
    let room = storeroom(&pool, 1, 10).await;

    let mut tx = pool.begin().await.unwrap();
    LuggageRepo::insert(&mut tx, &item(room, "Ada", "654321"))
        .await
        .unwrap();
    assert!(!LuggageRepo::code_in_use(&pool, "654321").await.unwrap());
    tx.commit().await.unwrap();

    assert!(LuggageRepo::code_in_use(&pool, "654321").await.unwrap());
}

// ---------------------------------------------------------------------------
// Tenant scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reads_are_tenant_scoped(pool: PgPool) {
    let ours = storeroom(&pool, 1, 10).await;
    let theirs = storeroom(&pool, 2, 10).await;
    let mine = insert(&pool, &item(ours, "Ada", "111111")).await;
    let foreign = insert(&pool, &item(theirs, "Bob", "111111")).await;

    let rows = LuggageRepo::list_by_code(&pool, "111111", 1).await.unwrap();
    let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![mine]);

    assert!(LuggageRepo::find_for_hotel(&pool, foreign, 1)
        .await
        .unwrap()
        .is_none());
    assert!(!LuggageRepo::soft_delete(&pool, foreign, 1).await.unwrap());

    let guests = LuggageRepo::list_guest_names(&pool, 1).await.unwrap();
    assert_eq!(guests, vec!["Ada".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lock_by_code_reports_tenant_per_row(pool: PgPool) {
    let ours = storeroom(&pool, 1, 10).await;
    let theirs = storeroom(&pool, 2, 10).await;
    insert(&pool, &item(ours, "Ada", "222222")).await;
    insert(&pool, &item(theirs, "Bob", "222222")).await;

    let mut tx = pool.begin().await.unwrap();
    let matches = LuggageRepo::lock_by_code(&mut tx, "222222").await.unwrap();
    tx.rollback().await.unwrap();

    let hotels: Vec<HotelId> = matches.iter().map(|m| m.hotel_id).collect();
    assert_eq!(hotels, vec![1, 2]);
    assert!(matches.iter().all(|m| m.status == STATUS_STORED));
}

// ---------------------------------------------------------------------------
// Status transitions and edits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_retrieved_stamps_actor(pool: PgPool) {
    let room = storeroom(&pool, 1, 10).await;
    let id = insert(&pool, &item(room, "Ada", "333333")).await;

    let mut conn = pool.acquire().await.unwrap();
    let row = LuggageRepo::mark_retrieved(&mut conn, id, "alice")
        .await
        .unwrap();

    assert_eq!(row.status, STATUS_RETRIEVED);
    assert_eq!(row.retrieved_by.as_deref(), Some("alice"));
    assert!(row.retrieved_at.is_some());
    assert!(LuggageRepo::list_guest_names(&pool, 1).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_fields_round_trips_photos(pool: PgPool) {
    let room = storeroom(&pool, 1, 10).await;
    let id = insert(&pool, &item(room, "Ada", "444444")).await;

    let fields = EditableFields {
        guest_name: "Grace".to_string(),
        contact_phone: Some("555-0199".to_string()),
        description: None,
        special_notes: Some("fragile".to_string()),
        photo_urls: vec!["/uploads/x.png".to_string(), "/uploads/y.png".to_string()],
        photo_url: Some("/uploads/x.png".to_string()),
    };

    let mut tx = pool.begin().await.unwrap();
    let locked = LuggageRepo::lock_for_hotel(&mut tx, id, 1)
        .await
        .unwrap()
        .expect("row should be visible to its tenant");
    assert_eq!(locked.guest_name, "Ada");
    let updated = LuggageRepo::update_fields(&mut tx, id, &fields)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!(updated.editable(), fields);
}

// ---------------------------------------------------------------------------
// Storerooms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_occupancy_counts_stored_rows_only(pool: PgPool) {
    let room = storeroom(&pool, 1, 3).await;
    insert(&pool, &item(room, "Ada", "555555")).await;
    let gone = insert(&pool, &item(room, "Ada", "555555")).await;
    let out = insert(&pool, &item(room, "Bob", "666666")).await;

    let mut conn = pool.acquire().await.unwrap();
    LuggageRepo::mark_retrieved(&mut conn, out, "alice")
        .await
        .unwrap();
    LuggageRepo::soft_delete(&pool, gone, 1).await.unwrap();

    assert_eq!(StoreroomRepo::count_stored(&mut conn, room).await.unwrap(), 1);

    let listed = StoreroomRepo::list_with_occupancy(&pool, 1).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].occupancy.stored_count, 1);
    assert_eq!(listed[0].occupancy.remaining, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_active_is_tenant_scoped(pool: PgPool) {
    let room = storeroom(&pool, 1, 3).await;

    assert!(StoreroomRepo::set_active(&pool, room, 2, false)
        .await
        .unwrap()
        .is_none());

    let toggled = StoreroomRepo::set_active(&pool, room, 1, false)
        .await
        .unwrap()
        .expect("owner can toggle");
    assert!(!toggled.is_active);
    assert!(StoreroomRepo::list_with_occupancy(&pool, 2)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Audit trails
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audit_logs_are_newest_first_and_paged(pool: PgPool) {
    let room = storeroom(&pool, 1, 10).await;
    let mut conn = pool.acquire().await.unwrap();
    let mut ids = Vec::new();
    for n in 0..3 {
        let id = LuggageRepo::insert(&mut conn, &item(room, &format!("Guest {n}"), "777777"))
            .await
            .unwrap()
            .id;
        AuditLogRepo::record_stored(&mut conn, 1, id, &format!("Guest {n}"), "desk")
            .await
            .unwrap();
        ids.push(id);
    }

    let page = AuditLogRepo::list_stored(&pool, 1, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].luggage_id, ids[2]);
    assert_eq!(page[0].stored_by, "desk");

    let rest = AuditLogRepo::list_stored(&pool, 1, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].luggage_id, ids[0]);

    assert!(AuditLogRepo::list_stored(&pool, 2, 50, 0)
        .await
        .unwrap()
        .is_empty());
}
