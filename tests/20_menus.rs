mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";
const MOBILE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

async fn get_menu(path: &str, user_agent: &str) -> Result<Vec<Value>> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}{}", server.base_url, path))
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "unexpected status for {}", path);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    Ok(body["data"].as_array().cloned().expect("data is a node list"))
}

#[tokio::test]
async fn right_topbar_is_fixed_help_links() -> Result<()> {
    let nodes = get_menu("/api/menus/topbar/right", DESKTOP_UA).await?;
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["type"], "link");
    assert_eq!(nodes[0]["label"], "Home");
    assert_eq!(nodes[1]["target"], "_blank");
    Ok(())
}

#[tokio::test]
async fn left_topbar_hides_remote_services_on_mobile() -> Result<()> {
    let desktop = get_menu("/api/menus/topbar/left", DESKTOP_UA).await?;
    let mobile = get_menu("/api/menus/topbar/left", MOBILE_UA).await?;

    let data_items = |nodes: &[Value]| {
        nodes
            .iter()
            .find(|n| n["type"] == "dropdown" && n["label"] == "Data")
            .and_then(|n| n["items"].as_array().cloned())
            .expect("Data dropdown present")
    };

    assert_eq!(data_items(&desktop).len(), 3);
    assert_eq!(data_items(&mobile).len(), 2);
    Ok(())
}

#[tokio::test]
async fn anonymous_user_menu_ends_with_sign_in() -> Result<()> {
    let nodes = get_menu("/api/menus/user", DESKTOP_UA).await?;
    let last = nodes.last().expect("at least the sign-in entry");
    assert_eq!(last["type"], "link");
    assert_eq!(last["label"], "Sign in");
    // No profile dropdown without a bearer token
    assert!(nodes.iter().all(|n| n["type"] != "dropdown"));
    Ok(())
}

#[tokio::test]
async fn placeholder_menu_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/menus/placeholder/TOPBAR", server.base_url))
        .send()
        .await?;

    // CMS-backed route needs the database; accept the degraded statuses when
    // the test environment has none, same policy as the health check
    match res.status() {
        StatusCode::OK => {
            let body = res.json::<Value>().await?;
            assert_eq!(body["success"], true);
            assert!(body["data"].is_array());
        }
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {}
        other => panic!("unexpected status: {}", other),
    }
    Ok(())
}
