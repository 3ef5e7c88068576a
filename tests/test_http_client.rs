mod common;

use cocktaildb_client::client::{FetchError, HttpClient, Queries, RequestOptions, Serializer};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_get_builds_url_from_base_endpoint_and_queries() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/foo")
        .match_query(Matcher::Exact("a=1&b=x".to_string()))
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let client = HttpClient::new(format!("{}/api", server.url()));
    let queries = Queries::new().with("a", 1).with("b", "x");
    let response = client
        .get("/foo", &queries, &RequestOptions::default())
        .await
        .expect("GET should succeed");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.expect("body"), "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_json_body() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/foo")
        .match_body(r#"{"n":1}"#)
        .match_header("content-type", "application/json")
        .with_status(201)
        .create_async()
        .await;

    let client = HttpClient::new(server.url());
    let response = client
        .post("/foo", &json!({"n": 1}), &RequestOptions::default(), &Queries::new())
        .await
        .expect("POST should succeed");

    assert_eq!(response.status().as_u16(), 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_put_and_patch_send_bodies_with_their_methods() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let put = server
        .mock("PUT", "/item")
        .match_query(Matcher::Exact("id=7".to_string()))
        .match_body(r#"{"name":"Mojito"}"#)
        .with_status(200)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/item")
        .match_body(r#"{"glass":"Highball"}"#)
        .with_status(200)
        .create_async()
        .await;

    let client = HttpClient::new(server.url());
    client
        .put(
            "/item",
            &json!({"name": "Mojito"}),
            &RequestOptions::default(),
            &Queries::new().with("id", 7),
        )
        .await
        .expect("PUT should succeed");
    client
        .patch(
            "/item",
            &json!({"glass": "Highball"}),
            &RequestOptions::default(),
            &Queries::new(),
        )
        .await
        .expect("PATCH should succeed");

    put.assert_async().await;
    patch.assert_async().await;
}

#[tokio::test]
async fn test_delete_sends_no_body() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("DELETE", "/item")
        .match_query(Matcher::Exact("id=3".to_string()))
        .match_body("")
        .with_status(204)
        .create_async()
        .await;

    let client = HttpClient::new(server.url());
    let response = client
        .delete("/item", &RequestOptions::default(), &Queries::new().with("id", 3))
        .await
        .expect("DELETE should succeed");

    assert_eq!(response.status().as_u16(), 204);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_call_site_headers_override_instance_headers() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/foo")
        .match_header("content-type", "text/plain")
        .match_header("x-test", "1")
        .with_status(200)
        .create_async()
        .await;

    let client = HttpClient::builder()
        .base_url(server.url())
        .header("X-Test", "1")
        .build();
    let options = RequestOptions::new().header("Content-Type", "text/plain");

    client
        .get("/foo", &Queries::new(), &options)
        .await
        .expect("GET should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_serializer_is_used() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/form")
        .match_body("n=1")
        .with_status(200)
        .create_async()
        .await;

    let serializer = Serializer::new(|body| {
        let value = serde_json::to_value(body)?;
        let pairs: Vec<String> = value
            .as_object()
            .ok_or("expected an object")?
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        Ok(pairs.join("&"))
    });
    let options = RequestOptions::new()
        .header("Content-Type", "application/x-www-form-urlencoded")
        .serializer(serializer);

    let client = HttpClient::new(server.url());
    client
        .post("/form", &json!({"n": 1}), &options, &Queries::new())
        .await
        .expect("POST should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_statuses_are_returned_not_raised() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let not_found = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;
    let broken = server
        .mock("GET", "/broken")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = HttpClient::new(server.url());
    let options = RequestOptions::default();

    let response = client
        .get("/missing", &Queries::new(), &options)
        .await
        .expect("404 is still a response");
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.expect("body"), "Not Found");

    let response = client
        .get("/broken", &Queries::new(), &options)
        .await
        .expect("500 is still a response");
    assert_eq!(response.status().as_u16(), 500);

    not_found.assert_async().await;
    broken.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_host_is_a_request_error() {
    common::init_test_logging();
    let client = HttpClient::new(common::UNREACHABLE_BASE_URL);

    let result = client
        .get("/foo", &Queries::new(), &RequestOptions::default())
        .await;

    match result {
        Err(FetchError::Request(e)) => assert!(e.is_connect() || e.is_request()),
        other => panic!("Expected FetchError::Request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    common::init_test_logging();
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .expect(3)
        .create_async()
        .await;

    let client = HttpClient::new(server.url());
    let options = RequestOptions::default();
    let (gin, rum, vodka) = (
        Queries::new().with("s", "gin"),
        Queries::new().with("s", "rum"),
        Queries::new().with("s", "vodka"),
    );

    let (a, b, c) = tokio::join!(
        client.get("/search.php", &gin, &options),
        client.get("/search.php", &rum, &options),
        client.get("/search.php", &vodka, &options),
    );

    for result in [a, b, c] {
        assert_eq!(result.expect("GET should succeed").status().as_u16(), 200);
    }
    mock.assert_async().await;
}
