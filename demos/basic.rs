#![allow(clippy::print_stdout)]

use url_record::{ParseError, Url};

fn main() -> Result<(), ParseError> {
    // Parse a simple URL
    let url = Url::parse("https://example.com:8080/path?query=value#hash", None)?;

    println!("URL: {}", url.href()); // https://example.com:8080/path?query=value#hash
    println!("Protocol: {}", url.protocol()); // https:
    println!("Host: {}", url.host()); // example.com
    println!("Port: {:?}", url.port()); // Some(8080)
    println!("Pathname: {}", url.pathname()); // /path
    println!("Search: {:?}", url.search()); // Some("query=value")
    println!("Hash: {:?}", url.hash()); // Some("#hash")
    println!("Origin: {}", url.origin()); // https://example.com:8080

    // Resolve a reference and derive a new record
    let next = url.join("../other?page=2")?.with_hash(None)?;
    println!("Joined: {next}"); // https://example.com:8080/other?page=2

    // Failures carry a single error kind
    match Url::parse("not a url", None) {
        Ok(url) => println!("Unexpected: {url}"),
        Err(err) => println!("Error: {err}"), // Missing scheme (relative URL without base)
    }
    Ok(())
}
