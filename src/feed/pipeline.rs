// src/feed/pipeline.rs
// =============================================================================
// Turns a raw listing response into the cards we show.
//
// Steps, in this exact order:
// 1. Non-2xx status             -> FeedError::Fetch (carries the status)
// 2. Body not a JSON array      -> FeedError::Format
// 3. Drop forks
// 4. Fill in missing description / language / homepage
// 5. Keep the first MAX_REPOS, in the order GitHub sent them
//
// GitHub already sorts by "updated" because we asked it to, so nothing here
// re-sorts. Truncation happens *after* fork removal: a fork never takes a slot.
// =============================================================================

use super::model::{DisplayRepo, RemoteRepoRecord};
use crate::error::{FeedError, Result};
use crate::github::RawListing;
use serde_json::Value;

/// Most cards the projects grid will ever show
pub const MAX_REPOS: usize = 6;

/// Steps 1-2: validate the response and decode its records
pub fn parse_listing(raw: &RawListing) -> Result<Vec<RemoteRepoRecord>> {
    if !raw.is_success() {
        return Err(FeedError::Fetch { status: raw.status });
    }

    let value: Value = serde_json::from_str(&raw.body)
        .map_err(|e| FeedError::Format(format!("body is not JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(FeedError::Format(
            "expected an array of repositories".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| FeedError::Format(format!("entry {}: {}", i, e)))
        })
        .collect()
}

/// Steps 3-5: filter forks, normalize, cap the list
pub fn prepare(records: Vec<RemoteRepoRecord>) -> Vec<DisplayRepo> {
    records
        .into_iter()
        .filter(|record| !record.fork)
        .map(DisplayRepo::from)
        .take(MAX_REPOS)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `let ... else`?
//    - `let Value::Array(items) = value else { return ... };`
//    - Binds `items` if the pattern matches, otherwise runs the else block
//    - The else block must leave the function (return, break, panic...)
//
// 2. Why collect() into Result<Vec<_>>?
//    - An iterator of Result<T, E> can be collected into Result<Vec<T>, E>
//    - It stops at the first Err and returns it
//    - So one malformed entry rejects the whole listing
//
// 3. Why take() after map()?
//    - Iterators are lazy: map() only runs for items that are pulled
//    - take(6) stops pulling after six, so the 7th repo is never normalized
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(id: u64, fork: bool) -> Value {
        json!({
            "id": id,
            "name": format!("repo-{}", id),
            "description": format!("Repository number {}", id),
            "html_url": format!("https://github.com/someone/repo-{}", id),
            "homepage": "",
            "language": "Rust",
            "stargazers_count": id * 10,
            "forks_count": id,
            "topics": ["rust"],
            "updated_at": "2024-03-01T12:00:00Z",
            "fork": fork
        })
    }

    fn ok_listing(items: Vec<Value>) -> RawListing {
        RawListing {
            status: 200,
            body: Value::Array(items).to_string(),
        }
    }

    fn ids(repos: &[DisplayRepo]) -> Vec<u64> {
        repos.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_bad_status_is_fetch_error() {
        let raw = RawListing {
            status: 403,
            body: r#"{"message":"API rate limit exceeded"}"#.to_string(),
        };
        assert!(matches!(
            parse_listing(&raw),
            Err(FeedError::Fetch { status: 403 })
        ));
    }

    #[test]
    fn test_object_body_is_format_error() {
        let raw = RawListing {
            status: 200,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert!(matches!(parse_listing(&raw), Err(FeedError::Format(_))));
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let raw = RawListing {
            status: 200,
            body: "<html>oops</html>".to_string(),
        };
        assert!(matches!(parse_listing(&raw), Err(FeedError::Format(_))));
    }

    #[test]
    fn test_malformed_entry_is_format_error() {
        let raw = ok_listing(vec![record_json(1, false), json!({ "name": "no-id" })]);
        match parse_listing(&raw) {
            Err(FeedError::Format(msg)) => assert!(msg.starts_with("entry 1")),
            other => panic!("expected format error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_is_fine() {
        let records = parse_listing(&ok_listing(vec![])).unwrap();
        assert!(prepare(records).is_empty());
    }

    #[test]
    fn test_eight_records_two_forks() {
        let items = (1..=8).map(|id| record_json(id, id == 2 || id == 5)).collect();
        let repos = prepare(parse_listing(&ok_listing(items)).unwrap());

        assert_eq!(repos.len(), 6);
        assert_eq!(ids(&repos), vec![1, 3, 4, 6, 7, 8]);
        assert!(repos.iter().all(|r| !r.fork));
    }

    #[test]
    fn test_length_is_min_of_six_and_non_forks() {
        // (total records, every k-th record is a fork)
        let cases = [(0, 0), (3, 0), (6, 0), (10, 0), (10, 2), (12, 3), (4, 1)];
        for (n, every) in cases {
            let records: Vec<RemoteRepoRecord> = (1..=n)
                .map(|id| {
                    let fork = every > 0 && id % every == 0;
                    serde_json::from_value(record_json(id, fork)).unwrap()
                })
                .collect();
            let forks = records.iter().filter(|r| r.fork).count();

            let repos = prepare(records);
            assert_eq!(
                repos.len(),
                MAX_REPOS.min(n as usize - forks),
                "n={} every={}",
                n,
                every
            );
        }
    }

    #[test]
    fn test_truncation_keeps_source_order() {
        // Stars descending in reverse: re-sorting by anything would show up
        let items = (1..=9).rev().map(|id| record_json(id, false)).collect();
        let repos = prepare(parse_listing(&ok_listing(items)).unwrap());
        assert_eq!(ids(&repos), vec![9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_popular_fork_is_still_excluded() {
        let mut fork = record_json(99, true);
        fork["stargazers_count"] = json!(100_000);
        let items = vec![fork, record_json(1, false)];

        let repos = prepare(parse_listing(&ok_listing(items)).unwrap());
        assert_eq!(ids(&repos), vec![1]);
    }

    #[test]
    fn test_missing_fields_are_normalized() {
        let mut bare = record_json(3, false);
        bare["description"] = Value::Null;
        bare["language"] = Value::Null;
        bare["homepage"] = Value::Null;

        let repos = prepare(parse_listing(&ok_listing(vec![bare])).unwrap());
        assert_eq!(repos[0].description, "No description provided");
        assert_eq!(repos[0].language, "Unknown");
        assert_eq!(repos[0].homepage, "");
        assert_eq!(repos[0].stargazers_count, 30);
    }
}
