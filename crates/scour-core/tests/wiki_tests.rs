use scour_core::config::WikiConfig;
use scour_core::wiki::{WikiClient, WikiError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> WikiConfig {
    let mut config = WikiConfig::default();
    config.api_url = Some(format!("{}/w/api.php", server.uri()));
    config.request_timeout_secs = 5;
    config
}

#[tokio::test]
async fn search_preserves_upstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "turing"))
        .and(query_param("srlimit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "search": [
                    {"title": "Turing machine", "pageid": 30403},
                    {"title": "Alan Turing", "pageid": 1208},
                    {"title": "Turing test", "pageid": 30404}
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let hits = client.search("turing", 5).await.unwrap();

    let titles: Vec<&str> = hits.iter().map(|hit| hit.title.as_str()).collect();
    assert_eq!(titles, vec!["Turing machine", "Alan Turing", "Turing test"]);
    assert_eq!(hits[0].page_id, 30403);
}

#[tokio::test]
async fn search_with_no_matches_returns_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"search": []}
        })))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let hits = client.search("nonexistent gibberish", 5).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn search_http_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let err = client.search("anything", 5).await.unwrap_err();
    assert!(matches!(err, WikiError::Api { status: 503 }));
}

#[tokio::test]
async fn fetch_extract_returns_text_and_canonical_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts"))
        .and(query_param("titles", "Turing machine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "pages": {
                    "30403": {
                        "pageid": 30403,
                        "title": "Turing machine",
                        "extract": "A Turing machine is a mathematical model of computation."
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let page = client.fetch_extract("Turing machine").await.unwrap();
    assert_eq!(
        page.extract,
        "A Turing machine is a mathematical model of computation."
    );
    assert_eq!(page.url, "https://en.wikipedia.org/wiki/Turing_machine");
}

#[tokio::test]
async fn fetch_extract_missing_page_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"-1": {"title": "Nope", "missing": ""}}}
        })))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_extract("Nope").await.unwrap_err();
    assert!(matches!(err, WikiError::MissingExtract(title) if title == "Nope"));
}

#[tokio::test]
async fn fetch_extract_empty_extract_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": {"7": {"pageid": 7, "title": "Blank", "extract": ""}}}
        })))
        .mount(&server)
        .await;

    let client = WikiClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_extract("Blank").await.unwrap_err();
    assert!(matches!(err, WikiError::MissingExtract(_)));
}
