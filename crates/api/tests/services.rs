//! Service-level tests for intake and checkout, below the HTTP layer.

mod common;

use assert_matches::assert_matches;
use bellhop_api::error::AppError;
use bellhop_api::services::{CheckoutResolver, IntakeCoordinator};
use bellhop_core::error::CoreError;
use std::time::Duration;

use bellhop_core::intake::{GuestDetails, IntakeShape, ItemSpec, ResolvedItem};
use bellhop_core::types::DbId;
use bellhop_db::models::luggage::CreateLuggage;
use bellhop_db::repositories::LuggageRepo;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

fn guest(name: &str) -> GuestDetails {
    GuestDetails::new(Some(name.to_string()), None, None, None, "desk").unwrap()
}

fn items(storeroom_ids: &[i64]) -> Vec<ResolvedItem> {
    let specs = storeroom_ids
        .iter()
        .map(|id| ItemSpec {
            storeroom_id: Some(*id),
            ..Default::default()
        })
        .collect();
    IntakeShape::from_parts(ItemSpec::default(), specs)
        .resolve()
        .unwrap()
}

async fn insert_stored(pool: &PgPool, storeroom_id: DbId, guest: &str, code: &str) -> DbId {
    let input = CreateLuggage {
        storeroom_id,
        guest_name: guest.to_string(),
        staff_name: "desk".to_string(),
        contact_phone: None,
        contact_email: None,
        description: Some("suitcase".to_string()),
        quantity: 1,
        special_notes: None,
        photo_urls: Vec::new(),
        photo_url: None,
        retrieval_code: code.to_string(),
    };
    let mut conn = pool.acquire().await.unwrap();
    LuggageRepo::insert(&mut conn, &input).await.unwrap().id
}

async fn status_of(pool: &PgPool, id: DbId) -> String {
    sqlx::query_scalar("SELECT status FROM luggage WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn intake_rejects_empty_batch(pool: PgPool) {
    let intake = IntakeCoordinator::new(pool);

    let err = intake.create_batch(1, "desk", &guest("Ada"), &[]).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn intake_reports_full_storeroom(pool: PgPool) {
    let room = common::create_storeroom(&pool, 1, "Zero", 0).await;
    let intake = IntakeCoordinator::new(pool);

    let err = intake
        .create_batch(1, "desk", &guest("Ada"), &items(&[room]))
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::CapacityExceeded(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn intake_hides_foreign_storeroom(pool: PgPool) {
    let foreign = common::create_storeroom(&pool, 2, "Theirs", 5).await;
    let intake = IntakeCoordinator::new(pool);

    let err = intake
        .create_batch(1, "desk", &guest("Ada"), &items(&[foreign]))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound { entity: "Storeroom", .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkout_distinguishes_unknown_from_ineligible(pool: PgPool) {
    let room = common::create_storeroom(&pool, 1, "Ours", 5).await;
    let intake = IntakeCoordinator::new(pool.clone());
    let checkout = CheckoutResolver::new(pool);

    let outcome = intake
        .create_batch(1, "desk", &guest("Ada"), &items(&[room, room]))
        .await
        .unwrap();
    assert_eq!(outcome.items.len(), 2);

    let err = checkout.checkout("   ", 1, "desk").await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));

    let err = checkout.checkout("nope", 1, "desk").await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Luggage", .. }));

    let err = checkout
        .checkout(&outcome.retrieval_code, 2, "intruder")
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound { entity: "Stored luggage", .. })
    );

    let ids = checkout
        .checkout(&outcome.retrieval_code, 1, "desk")
        .await
        .unwrap();
    let expected: Vec<i64> = outcome.items.iter().map(|l| l.id).collect();
    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn intake_and_checkout_complete_on_single_connection_pool(pool: PgPool) {
    let room = common::create_storeroom(&pool, 1, "Ours", 5).await;
    let single = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with((*pool.connect_options()).clone())
        .await
        .unwrap();

    let outcome = IntakeCoordinator::new(single.clone())
        .create_batch(1, "desk", &guest("Ada"), &items(&[room, room]))
        .await
        .expect("intake must not need a second connection");
    assert_eq!(outcome.items.len(), 2);

    let ids = CheckoutResolver::new(single)
        .checkout(&outcome.retrieval_code, 1, "desk")
        .await
        .expect("checkout must not need a second connection");
    assert_eq!(ids.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn checkout_skips_retrieved_and_foreign_rows(pool: PgPool) {
    let ours = common::create_storeroom(&pool, 1, "Ours", 10).await;
    let theirs = common::create_storeroom(&pool, 2, "Theirs", 10).await;

    let already_out = insert_stored(&pool, ours, "Ada", "424242").await;
    let first = insert_stored(&pool, ours, "Ada", "424242").await;
    let second = insert_stored(&pool, ours, "Ada", "424242").await;
    let foreign = insert_stored(&pool, theirs, "Grace", "424242").await;
    {
        let mut conn = pool.acquire().await.unwrap();
        LuggageRepo::mark_retrieved(&mut conn, already_out, "earlier")
            .await
            .unwrap();
    }

    let ids = CheckoutResolver::new(pool.clone())
        .checkout("424242", 1, "desk")
        .await
        .unwrap();
    assert_eq!(ids, vec![first, second]);

    assert_eq!(status_of(&pool, first).await, "retrieved");
    assert_eq!(status_of(&pool, second).await, "retrieved");
    assert_eq!(status_of(&pool, foreign).await, "stored");

    let retrieved_by: Option<String> =
        sqlx::query_scalar("SELECT retrieved_by FROM luggage WHERE id = $1")
            .bind(already_out)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(retrieved_by.as_deref(), Some("earlier"));
}
