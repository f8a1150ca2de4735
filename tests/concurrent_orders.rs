//! Concurrent clients against one service instance.

use std::collections::BTreeSet;

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_concurrent_order_creation() {
    let svc = common::start_service().await;
    let res = svc
        .client
        .post(svc.url("/productos"))
        .json(&json!({"id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let concurrency = 20;
    let requests_per_task = 10;

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = svc.client.clone();
        let url = svc.url("/pedidos");
        tasks.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for _ in 0..requests_per_task {
                let res = client
                    .post(&url)
                    .json(&json!({"productos": [1]}))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(res.status(), 201);
                let body: Value = res.json().await.unwrap();
                ids.push(body["id"].as_u64().unwrap());
            }
            ids
        }));
    }

    let mut all_ids = BTreeSet::new();
    for task in tasks {
        for id in task.await.unwrap() {
            assert!(all_ids.insert(id), "order id {id} assigned twice");
        }
    }

    let total = (concurrency * requests_per_task) as u64;
    assert_eq!(all_ids, (1..=total).collect::<BTreeSet<_>>());

    let listed: Value = svc
        .client
        .get(svc.url("/pedidos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len() as u64, total);
}
