//! Search links derived from the current title. Pure functions of the
//! title text; titles are percent-encoded before being embedded.

const IMDB_SEARCH: &str = "https://www.imdb.com/find?q=";
const LETTERBOXD_SEARCH: &str = "https://letterboxd.com/search/";

pub fn imdb_search_url(title: &str) -> String {
    format!("{IMDB_SEARCH}{}", percent_encode(title))
}

pub fn letterboxd_search_url(title: &str) -> String {
    format!("{LETTERBOXD_SEARCH}{}/", percent_encode(title))
}

// RFC 3986 unreserved characters pass through, everything else is escaped.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
