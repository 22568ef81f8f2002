mod common;

use axum::http::StatusCode;
use common::{app_for, build_app, max_id, seeded_pool, send, send_raw};
use serde_json::{json, Value};

fn order_body() -> Value {
    json!({
        "name": "Paint the fence",
        "description": "Two coats, green",
        "start_date": "2024-05-01",
        "end_date": "next week",
        "address": "1 Rechnaya St",
        "price": 3000,
        "customer_id": 3,
        "executor_id": 2
    })
}

#[tokio::test]
async fn list_resolves_user_names() {
    let app = build_app().await;
    let (status, body) = send(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["customer_id"], "Hugo");
    assert_eq!(rows[0]["executor_id"], "Alina");
    assert_eq!(rows[1]["customer_id"], "Маргарита");
    // executor 17 has no user row
    assert_eq!(rows[2]["customer_id"], "Hugo");
    assert_eq!(rows[2]["executor_id"], 17);
}

#[tokio::test]
async fn read_keeps_raw_ids() {
    let app = build_app().await;
    let (status, order) = send(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["customer_id"], 1);
    assert_eq!(order["executor_id"], 2);
}

#[tokio::test]
async fn seeded_dates_are_normalized() {
    let app = build_app().await;
    let (_, order) = send(&app, "GET", "/orders/1", None).await;
    assert_eq!(order["start_date"], "2013-02-08 00:00:00");
    assert_eq!(order["end_date"], "2013-03-22 00:00:00");
}

#[tokio::test]
async fn created_dates_are_stored_raw() {
    let app = build_app().await;
    let (status, body) = send(&app, "POST", "/orders", Some(order_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (_, list) = send(&app, "GET", "/orders", None).await;
    let id = max_id(&list);
    let (_, order) = send(&app, "GET", &format!("/orders/{}", id), None).await;
    let mut expected = order_body();
    expected["id"] = json!(id);
    assert_eq!(order, expected);
}

#[tokio::test]
async fn update_never_touches_start_date() {
    let app = build_app().await;
    let (status, body) = send(&app, "PUT", "/orders/2", Some(order_body())).await;
    assert_eq!(status, StatusCode::NON_AUTHORITATIVE_INFORMATION);
    assert_eq!(body, Value::Null);

    let (_, order) = send(&app, "GET", "/orders/2", None).await;
    assert_eq!(order["start_date"], "2014-11-15 00:00:00");
    assert_eq!(order["end_date"], "next week");
    assert_eq!(order["name"], "Paint the fence");
    assert_eq!(order["address"], "1 Rechnaya St");
    assert_eq!(order["price"], 3000);
    assert_eq!(order["customer_id"], 3);
}

#[tokio::test]
async fn update_with_missing_key_is_rejected() {
    let app = build_app().await;
    let mut body = order_body();
    body.as_object_mut().unwrap().remove("price");
    let (status, _) = send(&app, "PUT", "/orders/1", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, order) = send(&app, "GET", "/orders/1", None).await;
    assert_eq!(order["name"], "Kitchen shelves");
}

#[tokio::test]
async fn delete_answers_203() {
    let app = build_app().await;
    let (status, body) = send(&app, "DELETE", "/orders/3", None).await;
    assert_eq!(status, StatusCode::NON_AUTHORITATIVE_INFORMATION);
    assert_eq!(body, Value::Null);
    let (status, _) = send(&app, "GET", "/orders/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_user_falls_back_to_ids_in_list() {
    let app = build_app().await;
    send(&app, "DELETE", "/users/1", None).await;
    let (_, body) = send(&app, "GET", "/orders", None).await;
    assert_eq!(body[0]["customer_id"], 1);
    assert_eq!(body[0]["executor_id"], "Alina");
}

#[tokio::test]
async fn list_resolves_names_past_sqlite_parameter_limit() {
    let pool = seeded_pool().await;
    let mut tx = pool.begin().await.unwrap();
    sqlx::query(
        "INSERT INTO \"user\" (id, first_name, last_name, age, email, role, phone) \
         VALUES (90000, 'Zoya', 'Last', 50, 'z@mail.test', 'executor', '+7')",
    )
    .execute(&mut *tx)
    .await
    .unwrap();
    // 17000 orders referencing 34000 distinct user ids, more than one statement may bind.
    for i in 0..17_000i64 {
        sqlx::query(
            "INSERT INTO \"order\" (name, description, start_date, end_date, address, price, customer_id, executor_id) \
             VALUES ('n', 'd', 's', 'e', 'a', 1, ?, ?)",
        )
        .bind(100 + i)
        .bind(40_000 + i)
        .execute(&mut *tx)
        .await
        .unwrap();
    }
    sqlx::query(
        "INSERT INTO \"order\" (name, description, start_date, end_date, address, price, customer_id, executor_id) \
         VALUES ('last', 'd', 's', 'e', 'a', 1, 1, 90000)",
    )
    .execute(&mut *tx)
    .await
    .unwrap();
    tx.commit().await.unwrap();

    let app = app_for(pool);
    let (status, body) = send(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3 + 17_000 + 1);
    assert_eq!(rows[0]["customer_id"], "Hugo");
    assert_eq!(rows[3]["customer_id"], 100);
    assert_eq!(rows[3]["executor_id"], 40_000);
    let last = rows.last().unwrap();
    assert_eq!(last["customer_id"], "Hugo");
    assert_eq!(last["executor_id"], "Zoya");
}

#[tokio::test]
async fn missing_order_is_404_on_every_by_id_route() {
    let app = build_app().await;
    let (status, err) = send(&app, "GET", "/orders/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"]["code"], "not_found");
    let (status, _) = send(&app, "PUT", "/orders/999", Some(order_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", "/orders/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_missing_key_is_rejected() {
    let app = build_app().await;
    let mut body = order_body();
    body.as_object_mut().unwrap().remove("customer_id");
    let (status, err) = send(&app, "POST", "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["error"]["code"], "validation_error");
}

#[tokio::test]
async fn malformed_json_gets_error_envelope() {
    let app = build_app().await;
    let (status, err) = send_raw(&app, "POST", "/orders", Some("application/json"), "{\"name\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"]["code"], "bad_request");
}
