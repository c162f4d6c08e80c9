use chrono::{Duration, TimeZone, Utc};
use needledrop_be::db::feed::paginate;
use needledrop_be::models::profile::Profile;
use needledrop_be::models::rating::{Category, Rating, RatingWithProfile};

fn entry(n: usize) -> RatingWithProfile {
    let created = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap() - Duration::minutes(n as i64);

    RatingWithProfile {
        rating: Rating {
            user_id: format!("user-{n}"),
            resource_id: format!("album-{n}"),
            parent_id: Some(format!("artist-{n}")),
            category: Category::Album,
            rating: 8,
            content: None,
            deactivated: false,
            created_at: created,
            updated_at: created,
        },
        profile: Profile {
            user_id: format!("user-{n}"),
            handle: format!("handle-{n}"),
            name: format!("User {n}"),
            image_url: None,
            bio: None,
            deactivated: false,
            created_at: created,
            updated_at: created,
        },
    }
}

fn entries(count: usize) -> Vec<RatingWithProfile> {
    (0..count).map(entry).collect()
}

#[test]
fn test_full_page_sets_next_cursor() {
    // 3 matching rows fetched as limit + 1 = 3; page of 2 plus a next offset
    let page = paginate(entries(3), 2, 0);

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.next_cursor, Some(2));
}

#[test]
fn test_final_page_has_no_cursor() {
    let page = paginate(entries(1), 2, 2);

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_cursor, None);
}

#[test]
fn test_exact_page_is_exhausted() {
    // Exactly limit rows came back: no extra row, no further page
    let page = paginate(entries(2), 2, 0);

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.next_cursor, None);
}

#[test]
fn test_empty_page() {
    let page = paginate(Vec::new(), 20, 0);

    assert!(page.items.is_empty());
    assert_eq!(page.next_cursor, None);
}

#[test]
fn test_cursor_advances_by_page_size() {
    let page = paginate(entries(21), 20, 40);

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.next_cursor, Some(60));
}

#[test]
fn test_pages_cover_dataset_exactly_once() {
    // Walking cursor 0 -> nextCursor over a static dataset yields every row once
    let dataset = entries(5);
    let limit = 2;

    let mut seen: Vec<String> = Vec::new();
    let mut cursor = 0;
    loop {
        let window: Vec<RatingWithProfile> = dataset
            .iter()
            .skip(cursor as usize)
            .take(limit as usize + 1)
            .cloned()
            .collect();
        let page = paginate(window, limit, cursor);

        seen.extend(page.items.iter().map(|item| item.rating.resource_id.clone()));

        match page.next_cursor {
            Some(next) => cursor = next,
            None => break,
        }
    }

    let expected: Vec<String> = dataset
        .iter()
        .map(|item| item.rating.resource_id.clone())
        .collect();
    assert_eq!(seen, expected);
}
