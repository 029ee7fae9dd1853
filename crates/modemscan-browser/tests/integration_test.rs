use modemscan_browser::{BrowserEngine, BrowserError, PageFetcher};
use modemscan_core::BrowserConfig;

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_fetch_inline_page() {
    let engine = BrowserEngine::new(BrowserConfig::default());

    let html = engine
        .fetch("data:text/html,<table><tr><td class=\"info_value\">E3372</td></tr></table>")
        .await
        .expect("fetch data URL");
    assert!(html.contains("info_value"));
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_unreachable_device_is_fetch_failure() {
    let engine = BrowserEngine::new(BrowserConfig {
        navigation_timeout_secs: 5,
        ..BrowserConfig::default()
    });

    // TEST-NET-1, never routed
    let err = engine
        .fetch("http://192.0.2.1/html/deviceinformation.html")
        .await
        .expect_err("unreachable address must fail");
    assert!(matches!(
        err,
        BrowserError::FetchFailed { .. } | BrowserError::Timeout { .. }
    ));
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_sessions_do_not_leak_between_fetches() {
    let engine = BrowserEngine::new(BrowserConfig {
        navigation_timeout_secs: 5,
        ..BrowserConfig::default()
    });

    for _ in 0..3 {
        let _ = engine.fetch("http://192.0.2.1/").await;
    }
    assert!(engine.fetch("data:text/html,<p>ok</p>").await.is_ok());
}
