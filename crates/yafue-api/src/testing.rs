//! In-process fake backend and JSON fixtures for tests.

use axum::Router;
use serde_json::{json, Value};

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test backend");
    });
    format!("http://{addr}")
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "firstName": "Nombre",
        "lastName": "Apellido",
        "email": format!("{username}@example.com"),
        "image": null,
        "balance": 0.0,
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z"
    })
}

pub fn currency_json() -> Value {
    json!({ "id": "1", "name": "Peso", "symbol": "$" })
}

pub fn group_json(id: &str, name: &str, members: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Grupo de prueba",
        "image": "",
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z",
        "users": members.iter().map(|m| user_json(m, m)).collect::<Vec<_>>(),
    })
}

/// `date` is an RFC 3339 timestamp.
pub fn meeting_json(id: &str, name: &str, date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Juntada de prueba",
        "date": date,
        "place": "Casa de Tomi",
        "pay_type": "EQUAL",
        "amount": 9000.0,
        "currency": currency_json(),
        "expenseDescription": "Comida",
        "users": [user_json("u1", "juli")],
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z"
    })
}

pub fn expense_json(id: &str, amount: f64, paid: bool) -> Value {
    json!({
        "id": id,
        "description": "Parte del asado",
        "amount": amount,
        "currency": currency_json(),
        "pay_type": "EQUAL_PARTS",
        "paid": paid,
        "user": user_json("u1", "juli"),
        "meeting": {
            "id": "m1",
            "name": "Asado",
            "description": "Juntada de prueba",
            "date": "2025-02-01T20:00:00Z",
            "place": "Casa de Tomi",
            "pay_type": "EQUAL",
            "amount": 9000.0,
            "currency": currency_json(),
            "expenseDescription": "Comida"
        },
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z"
    })
}
