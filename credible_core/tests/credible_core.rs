use std::time::Duration;

use credible_core::*;

fn spam_table() -> ReputationTable {
    ReputationTable::new().with(
        "spam.example",
        ReputationEntry::new("Flagged", "Known spam source"),
    )
}

fn links(urls: &[&str]) -> Vec<Link> {
    urls.iter().map(|u| Link::new(*u)).collect()
}

#[test]
fn strips_one_www_label() {
    assert_eq!(normalize("https://www.example.com/a?b=c").as_deref(), Some("example.com"));
    assert_eq!(normalize("https://www.www.example.com/").as_deref(), Some("www.example.com"));
    assert_eq!(normalize("https://news.example.com/").as_deref(), Some("news.example.com"));
    // only a leading label is stripped
    assert_eq!(normalize("https://wwwexample.com/").as_deref(), Some("wwwexample.com"));
    assert_eq!(normalize("https://shop.www.example.com/").as_deref(), Some("shop.www.example.com"));
}

#[test]
fn normalize_is_idempotent_through_a_url() {
    for raw in [
        "http://www.spam.example/page",
        "https://www.example.org:8443/x",
        "https://sub.domain.example.net/",
    ] {
        let once = normalize(raw).expect("valid url");
        let twice = normalize(&format!("http://{once}/")).expect("valid url");
        assert_eq!(once, twice);
    }
}

#[test]
fn keeps_explicit_port_and_trims() {
    assert_eq!(normalize("  http://www.example.com:8080/x  ").as_deref(), Some("example.com:8080"));
    // default port is not part of the key
    assert_eq!(normalize("https://www.example.com:443/").as_deref(), Some("example.com"));
    assert_eq!(normalize("HTTP://WWW.Example.COM/").as_deref(), Some("example.com"));
}

#[test]
fn malformed_urls_normalize_to_none() {
    for raw in [
        "",
        "   ",
        "not a url",
        "www.example.com/page",
        "example.com:80",
        "http://",
        "mailto:someone@example.com",
        "file:///etc/hosts",
        "http://www./",
    ] {
        assert_eq!(normalize(raw), None, "{raw:?}");
    }
}

#[test]
fn no_signal_defaults_every_link() {
    let req = CredibilityRequest::new(links(&[
        "https://a.example/1",
        "garbage",
        "https://b.example/2",
    ]));
    let out = resolve(&req, None, &ReputationTable::new());

    assert_eq!(out.len(), 3);
    let urls: Vec<&str> = out.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, ["https://a.example/1", "garbage", "https://b.example/2"]);
    for r in &out {
        assert_eq!(r.verdict, UNASSESSED_VERDICT);
        assert_eq!(r.label, UNASSESSED_LABEL);
    }
    assert_eq!(out[1].domain, None);
}

#[test]
fn reputation_hit() {
    let req = CredibilityRequest::new(links(&["http://www.spam.example/page", "https://fine.example/"]));
    let out = resolve_tiered(&req, None, &spam_table());

    assert_eq!(out[0].0, Tier::Reputation);
    assert_eq!(out[0].1.domain.as_deref(), Some("spam.example"));
    assert_eq!(out[0].1.verdict, "Flagged");
    assert_eq!(out[0].1.label, "Known spam source");

    assert_eq!(out[1].0, Tier::Unassessed);
    assert_eq!(out[1].1.domain.as_deref(), Some("fine.example"));
}

#[test]
fn fact_check_dominates_reputation() {
    let fc = FactCheckOutcome::from_review(Some("False"), "PolitiFact");
    let req = CredibilityRequest::new(links(&[
        "http://www.spam.example/page",
        "https://fine.example/",
        "::not-a-url::",
    ]))
    .with_query("moon landing hoax");

    let out = resolve_tiered(&req, Some(&fc), &spam_table());
    assert_eq!(out.len(), 3);
    for (tier, r) in &out {
        assert_eq!(*tier, Tier::FactCheck);
        assert_eq!(r.verdict, "Fact Checked CLAIM: False");
        assert_eq!(r.label, "CLAIM RATED FALSE by PolitiFact");
    }
    // the domain is still reported even though it did not decide the verdict
    assert_eq!(out[0].1.domain.as_deref(), Some("spam.example"));
    assert_eq!(out[2].1.domain, None);
}

#[test]
fn empty_batch() {
    let fc = FactCheckOutcome::from_review(None, "Snopes");
    assert!(resolve(&CredibilityRequest::default(), Some(&fc), &spam_table()).is_empty());
    assert!(resolve(&CredibilityRequest::default(), None, &spam_table()).is_empty());
}

#[test]
fn outcome_defaults_rating() {
    let fc = FactCheckOutcome::from_review(None, "Snopes");
    assert_eq!(fc.verdict, format!("Fact Checked CLAIM: {DEFAULT_RATING}"));
    assert_eq!(fc.label, "CLAIM RATED RATED by Snopes");

    let fc = FactCheckOutcome::from_review(Some("Mostly false"), "AFP");
    assert_eq!(fc.label, "CLAIM RATED MOSTLY FALSE by AFP");
}

#[test]
fn fact_check_query_ignores_empty() {
    let req = CredibilityRequest::new(Vec::new());
    assert_eq!(req.fact_check_query(), None);
    assert_eq!(req.clone().with_query("").fact_check_query(), None);
    assert_eq!(req.with_query("vaccines").fact_check_query(), Some("vaccines"));
}

#[test]
fn api_key_gates_fact_checking() {
    assert!(!CheckCfg::default().fact_check_enabled);
    assert!(!CheckCfg::for_api_key(None).fact_check_enabled);
    assert!(!CheckCfg::for_api_key(Some("   ")).fact_check_enabled);
    assert!(!CheckCfg::for_api_key(Some(PLACEHOLDER_API_KEY)).fact_check_enabled);
    assert!(!CheckCfg::for_api_key(Some("AIza...")).fact_check_enabled);

    let cfg = CheckCfg::for_api_key(Some(" AIzaRealKey "));
    assert!(cfg.fact_check_enabled);
    assert_eq!(cfg.page_size, 1);
    assert_eq!(cfg.timeout, Duration::from_secs(5));
    assert_eq!(usable_api_key(Some(" AIzaRealKey ")), Some("AIzaRealKey"));
}

#[test]
fn wire_shapes() {
    // client-supplied domain is optional and ignored
    let req: CredibilityRequest = serde_json::from_str(
        r#"{"links":[{"url":"https://www.spam.example/x","domain":"whatever.test"},{"url":"https://b.example/"}]}"#,
    )
    .unwrap();
    assert_eq!(req.query, None);
    assert_eq!(req.links[1].domain, "");

    let out = resolve(&req, None, &spam_table());
    assert_eq!(out[0].domain.as_deref(), Some("spam.example"));

    let rec = VerdictRecord {
        url: "nope".into(),
        domain: None,
        verdict: UNASSESSED_VERDICT.into(),
        label: UNASSESSED_LABEL.into(),
    };
    let v = serde_json::to_value(&rec).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"url": "nope", "domain": null, "verdict": "Unassessed", "label": "No Fact Check Found"})
    );

    let table: ReputationTable =
        serde_json::from_str(r#"{"spam.example":{"verdict":"Flagged","label":"Known spam source"}}"#).unwrap();
    assert_eq!(table, spam_table());
    assert_eq!(table.len(), 1);
}

#[test]
fn table_keys_match_normalized_hosts() {
    let table: ReputationTable = serde_json::from_str(
        r#"{"Bücher.example": {"verdict": "Flagged", "label": "Unicode host"},
            "Port.example:80": {"verdict": "Flagged", "label": "Default port"},
            "alt.example:8080": {"verdict": "Flagged", "label": "Explicit port"}}"#,
    )
    .unwrap();

    for url in [
        "http://www.bücher.example/page",
        "http://xn--bcher-kva.example/",
        "http://PORT.example/",
        "http://port.example:80/",
        "http://alt.example:8080/x",
    ] {
        let domain = normalize(url).unwrap();
        assert!(table.get(&domain).is_some(), "{url} -> {domain}");
    }
    assert!(table.get("alt.example").is_none());

    assert_eq!(canonical_key(" Bücher.example "), "xn--bcher-kva.example");
    assert_eq!(canonical_key("spam.example"), "spam.example");
    let built = ReputationTable::new().with("SPAM.example", ReputationEntry::new("Flagged", "x"));
    assert!(built.get("spam.example").is_some());
}
