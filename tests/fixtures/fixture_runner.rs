#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_cases};
use url_record::Url;

/// Getter views in the shape the fixtures spell them.
fn field(url: &Url, name: &str) -> String {
    match name {
        "href" => url.href(),
        "protocol" => url.protocol(),
        "username" => url.username().to_string(),
        "password" => url.password().unwrap_or_default().to_string(),
        "hostname" => url.hostname().unwrap_or_default(),
        "port" => url.port().map(|p| p.to_string()).unwrap_or_default(),
        "pathname" => url.pathname().into_owned(),
        "search" => match url.search() {
            None | Some("") => String::new(),
            Some(q) => format!("?{q}"),
        },
        "hash" => url
            .hash()
            .filter(|h| h.len() > 1)
            .unwrap_or_default(),
        "origin" => url.origin(),
        other => panic!("unknown fixture field {other}"),
    }
}

fn run_cases(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();

    for case in cases {
        let TestCase::UrlTest {
            input,
            base,
            href,
            protocol,
            username,
            password,
            hostname,
            port,
            pathname,
            search,
            hash,
            origin,
            failure,
        } = case
        else {
            continue;
        };

        let base_url = base
            .as_deref()
            .map(|b| Url::parse(b, None).expect("fixture base parses"));
        let parsed = Url::parse(&input, base_url.as_ref());

        let mut failures = Vec::new();
        match (parsed, failure) {
            (Err(err), Some(kind)) => {
                let actual = format!("{err:?}");
                if actual != kind {
                    failures.push(("failure", kind, actual));
                }
            }
            (Ok(url), Some(kind)) => failures.push(("failure", kind, url.href())),
            (Err(err), None) => failures.push(("parse", "success".to_string(), format!("{err:?}"))),
            (Ok(url), None) => {
                let expectations = [
                    ("href", href),
                    ("protocol", protocol),
                    ("username", username),
                    ("password", password),
                    ("hostname", hostname),
                    ("port", port),
                    ("pathname", pathname),
                    ("search", search),
                    ("hash", hash),
                    ("origin", origin),
                ];
                for (name, expected) in expectations {
                    let Some(expected) = expected else { continue };
                    let actual = field(&url, name);
                    if actual != expected {
                        failures.push((name, expected, actual));
                    }
                }
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result
                .failures
                .extend(failures.into_iter().map(|(field, expected, actual)| FixtureFailure {
                    input: input.clone(),
                    base: base.clone(),
                    field,
                    expected,
                    actual,
                }));
        }
    }
    result
}

#[test]
fn test_fixture_cases() {
    let result = run_cases(load_cases());
    assert!(result.passed > 50, "{}", result.summary());
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_fixture_hrefs_are_fixed_points() {
    for case in load_cases() {
        let TestCase::UrlTest {
            href: Some(href), ..
        } = case
        else {
            continue;
        };
        let url = Url::parse(&href, None).unwrap();
        assert_eq!(url.href(), href);
    }
}

#[test]
fn test_fixture_can_parse_agrees() {
    for case in load_cases() {
        let TestCase::UrlTest {
            input,
            base,
            failure,
            ..
        } = case
        else {
            continue;
        };
        let base_url = base.as_deref().map(|b| Url::parse(b, None).unwrap());
        assert_eq!(
            Url::can_parse(&input, base_url.as_ref()),
            failure.is_none(),
            "{input:?}"
        );
    }
}
