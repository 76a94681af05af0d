//! Cenários ponta a ponta contra um Postgres real.
//! Rodar com: DATABASE_URL=postgres://... cargo test -- --ignored

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_text, build_test_app, get, post_form};
use rental_manager::{
    common::{error::AppError, period::Period},
    config::AppState,
    db::TenantRepository,
    models::{
        meter::SaveMeterPayload,
        room::{CreateRoomPayload, UpdateRoomPayload},
        tenant::StartTenantPayload,
    },
};

fn room_payload(name: &str, tenant: Option<&str>) -> CreateRoomPayload {
    CreateRoomPayload {
        name: name.into(),
        note: None,
        rent: 3_500_000,
        internet_fee: 20_000,
        cleaning_fee: 100_000,
        electricity_price: 4_500,
        water_price: 35_000,
        tenant_full_name: tenant.map(Into::into),
        tenant_phone: None,
        tenant_started_at: None,
    }
}

fn meter(yyyymm: &str, elec: (Option<f64>, f64), water: (Option<f64>, f64)) -> SaveMeterPayload {
    SaveMeterPayload {
        yyyymm: yyyymm.into(),
        elec_start: elec.0,
        elec_end: Some(elec.1),
        water_start: water.0,
        water_end: Some(water.1),
    }
}

async fn stored_invoice_total(pool: &PgPool, room_id: i32, yyyymm: &str) -> Option<i32> {
    sqlx::query_scalar("SELECT total FROM invoices WHERE room_id = $1 AND yyyymm = $2")
        .bind(room_id)
        .bind(yyyymm)
        .fetch_optional(pool)
        .await
        .unwrap()
}

async fn count_rows(pool: &PgPool, table: &str, room_id: i32) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE room_id = $1"))
        .bind(room_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn seed_loads_twelve_rooms_with_default_unit_prices(pool: PgPool) {
    let (rooms, wrong_prices): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE electricity_price <> 4500 OR water_price <> 35000) FROM tariffs",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(rooms, 12);
    assert_eq!(wrong_prices, 0);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn starting_a_tenant_closes_the_previous_one(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T101", Some("A"))).await.unwrap();

    let b = StartTenantPayload { full_name: "B".into(), phone: None, started_at: None };
    state.tenant_service.start_tenant(room.id, &b).await.unwrap();

    // Nunca mais de um inquilino ativo por quarto
    let tenants = TenantRepository::new(pool.clone());
    assert_eq!(tenants.count_active(room.id).await.unwrap(), 1);
    let current = tenants.find_active(room.id).await.unwrap().unwrap();
    assert!(current.is_active());
    assert_eq!(current.full_name, "B");

    let active = state.tenant_service.end_tenant(room.id).await.unwrap();
    assert_eq!(active.map(|t| t.full_name), Some("B".to_string()));

    let (open, closed): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE ended_at IS NULL), COUNT(*) FILTER (WHERE ended_at IS NOT NULL) \
         FROM tenants WHERE room_id = $1",
    )
    .bind(room.id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(open, 0);
    assert_eq!(closed, 2);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn invoice_is_recomputed_and_overwritten(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T102", None)).await.unwrap();

    let (_, _, first) = state.meter_service
        .save_reading(room.id, &meter("202403", (Some(100.0), 150.0), (Some(10.0), 15.0)))
        .await
        .unwrap();
    assert_eq!(first.map(|r| r.invoice.total), Some(4_020_000));

    // Abrir de novo não duplica nem altera o valor
    let period: Period = "202403".parse().unwrap();
    let again = state.billing_service.invoice_view(room.id, period).await.unwrap();
    assert_eq!(again.recalculated.invoice.total, 4_020_000);
    assert_eq!(count_rows(&pool, "invoices", room.id).await, 1);

    // Mudar o preço muda a fatura antiga na próxima visualização
    sqlx::query("UPDATE tariffs SET electricity_price = 5000 WHERE room_id = $1")
        .bind(room.id)
        .execute(&pool)
        .await
        .unwrap();
    let after = state.billing_service.invoice_view(room.id, period).await.unwrap();
    assert_eq!(after.recalculated.invoice.total, 4_045_000);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn blank_starts_use_previous_month_end(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T103", None)).await.unwrap();

    state.meter_service
        .save_reading(room.id, &meter("202312", (Some(100.0), 150.0), (Some(10.0), 15.0)))
        .await
        .unwrap();

    let (period, reading, _) = state.meter_service
        .save_reading(room.id, &meter("202401", (None, 200.0), (None, 20.0)))
        .await
        .unwrap();

    assert_eq!(period.to_string(), "202401");
    assert_eq!(reading.elec_start, 150.0);
    assert_eq!(reading.water_start, 15.0);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn decreasing_reading_writes_nothing(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T104", None)).await.unwrap();

    let result = state.meter_service
        .save_reading(room.id, &meter("202403", (Some(150.0), 100.0), (Some(10.0), 15.0)))
        .await;

    assert!(matches!(result, Err(AppError::ReadingDecreased)));
    assert_eq!(count_rows(&pool, "meter_readings", room.id).await, 0);
    assert_eq!(count_rows(&pool, "invoices", room.id).await, 0);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn invoice_without_reading_is_a_client_error(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T105", None)).await.unwrap();

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/rooms/{}/invoice/202403", room.id)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool, "invoices", room.id).await, 0);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn unknown_room_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/rooms/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn duplicate_room_name_is_a_conflict(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_form(
        app,
        "/rooms",
        "name=P201&rent=1&internet_fee=0&cleaning_fee=0&electricity_price=1&water_price=1",
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("P201"));
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn home_lists_rooms_with_active_tenant(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    state.room_service.create_room(&room_payload("T106", Some("Nguyễn <Văn> A"))).await.unwrap();

    let response = get(build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("T106"));
    assert!(html.contains("Nguyễn &lt;Văn&gt; A"));
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn editing_rates_with_period_recomputes_that_invoice(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T107", None)).await.unwrap();

    state.meter_service
        .save_reading(room.id, &meter("202403", (Some(100.0), 150.0), (Some(10.0), 15.0)))
        .await
        .unwrap();
    assert_eq!(stored_invoice_total(&pool, room.id, "202403").await, Some(4_020_000));

    let edit = UpdateRoomPayload {
        name: "T107".into(),
        note: None,
        rent: 3_500_000,
        internet_fee: 20_000,
        cleaning_fee: 100_000,
        electricity_price: 5_000,
        water_price: 35_000,
    };
    let period: Period = "202403".parse().unwrap();
    state.room_service.update_room(room.id, &edit, Some(period)).await.unwrap();

    // Lido direto da tabela, sem abrir a fatura
    assert_eq!(stored_invoice_total(&pool, room.id, "202403").await, Some(4_045_000));
}

#[sqlx::test(migrator = "rental_manager::db::MIGRATOR")]
#[ignore = "requer DATABASE_URL"]
async fn decreasing_resubmission_keeps_stored_reading_and_invoice(pool: PgPool) {
    let state = AppState::from_pool(pool.clone());
    let room = state.room_service.create_room(&room_payload("T108", None)).await.unwrap();

    state.meter_service
        .save_reading(room.id, &meter("202403", (Some(100.0), 150.0), (Some(10.0), 15.0)))
        .await
        .unwrap();

    let stamp_before: chrono::NaiveDateTime =
        sqlx::query_scalar("SELECT created_at FROM invoices WHERE room_id = $1 AND yyyymm = '202403'")
            .bind(room.id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = state.meter_service
        .save_reading(room.id, &meter("202403", (Some(100.0), 90.0), (Some(10.0), 15.0)))
        .await;
    assert!(matches!(result, Err(AppError::ReadingDecreased)));

    let (elec_start, elec_end): (f64, f64) = sqlx::query_as(
        "SELECT elec_start, elec_end FROM meter_readings WHERE room_id = $1 AND yyyymm = '202403'",
    )
    .bind(room.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!((elec_start, elec_end), (100.0, 150.0));

    let stamp_after: chrono::NaiveDateTime =
        sqlx::query_scalar("SELECT created_at FROM invoices WHERE room_id = $1 AND yyyymm = '202403'")
            .bind(room.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored_invoice_total(&pool, room.id, "202403").await, Some(4_020_000));
    assert_eq!(stamp_after, stamp_before);
    assert_eq!(count_rows(&pool, "meter_readings", room.id).await, 1);
}
