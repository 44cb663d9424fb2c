#![allow(clippy::expect_used)]

/// Fixture loader
///
/// Expected values use the browser getter conventions: an absent component reads
/// as the empty string, `search` keeps its `?` and `hash` keeps its `#`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    UrlTest {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        hostname: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        pathname: Option<String>,
        #[serde(default)]
        search: Option<String>,
        #[serde(default)]
        hash: Option<String>,
        #[serde(default)]
        origin: Option<String>,
        /// Name of the expected `ParseError` variant
        #[serde(default)]
        failure: Option<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        let mut out = format!("Passed: {}, Failed: {}", self.passed, self.failed);
        for f in &self.failures {
            out.push_str(&format!(
                "\n  {:?} (base {:?}) {}: expected {:?}, got {:?}",
                f.input, f.base, f.field, f.expected, f.actual
            ));
        }
        out
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("../data/url_cases.json");
    serde_json::from_str(data).expect("url_cases.json is valid")
}
