//! Integration tests for the site content repositories.
//!
//! Exercises profile, contacts, settings, portfolio and services against a
//! real database:
//! - Singleton upserts create then replace row 1
//! - Listings sort by the client `order` string, then creation time
//! - Partial updates leave omitted fields untouched
//! - Updates and deletes of unknown ids report absence

use sqlx::PgPool;
use vitrine_db::models::contact::UpsertContacts;
use vitrine_db::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use vitrine_db::models::profile::UpsertProfile;
use vitrine_db::models::service::{CreateService, UpdateService};
use vitrine_db::repositories::{ContactRepo, PortfolioRepo, ProfileRepo, ServiceRepo, SettingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(title: &str, order: &str) -> CreatePortfolioItem {
    CreatePortfolioItem {
        title: title.to_string(),
        description: format!("{title} description"),
        image_url: format!("https://img.test/{title}.png"),
        sort_order: order.to_string(),
        has_link: false,
        link_url: None,
    }
}

fn new_service(title: &str, order: &str) -> CreateService {
    CreateService {
        title: title.to_string(),
        includes: vec!["Design".to_string(), "Build".to_string()],
        target_audience: "Small businesses".to_string(),
        work_format: "Remote".to_string(),
        price: "from $500".to_string(),
        sort_order: order.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Profile & contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_upsert_replaces_singleton(pool: PgPool) {
    assert!(ProfileRepo::get(&pool).await.unwrap().is_none());

    let first = ProfileRepo::upsert(
        &pool,
        &UpsertProfile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            description: "Engineer".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(first.id, 1);

    let second = ProfileRepo::upsert(
        &pool,
        &UpsertProfile {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(second.id, 1);

    let stored = ProfileRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Grace");
    assert_eq!(stored.description, "");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profile")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_contacts_upsert_clears_omitted_links(pool: PgPool) {
    ContactRepo::upsert(
        &pool,
        &UpsertContacts {
            telegram: Some("https://t.me/someone".to_string()),
            github: Some("https://github.com/someone".to_string()),
        },
    )
    .await
    .unwrap();

    let replaced = ContactRepo::upsert(
        &pool,
        &UpsertContacts {
            telegram: Some("https://t.me/other".to_string()),
            github: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(replaced.telegram.as_deref(), Some("https://t.me/other"));
    assert_eq!(replaced.github, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_setting_upsert_and_get(pool: PgPool) {
    assert!(SettingRepo::get(&pool, "backgroundVideo").await.unwrap().is_none());

    SettingRepo::upsert(&pool, "backgroundVideo", "https://cdn.test/a.mp4")
        .await
        .unwrap();
    let updated = SettingRepo::upsert(&pool, "backgroundVideo", "https://cdn.test/b.mp4")
        .await
        .unwrap();
    assert_eq!(updated.value, "https://cdn.test/b.mp4");

    let stored = SettingRepo::get(&pool, "backgroundVideo").await.unwrap().unwrap();
    assert_eq!(stored.value, "https://cdn.test/b.mp4");
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_list_sorted_by_order(pool: PgPool) {
    PortfolioRepo::create(&pool, &new_item("third", "3")).await.unwrap();
    PortfolioRepo::create(&pool, &new_item("first", "1")).await.unwrap();
    PortfolioRepo::create(&pool, &new_item("second", "2")).await.unwrap();

    let titles: Vec<String> = PortfolioRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_partial_update(pool: PgPool) {
    let item = PortfolioRepo::create(&pool, &new_item("landing", "1")).await.unwrap();
    assert!(!item.has_link);

    let updated = PortfolioRepo::update(
        &pool,
        item.id,
        &UpdatePortfolioItem {
            has_link: Some(true),
            link_url: Some(Some("https://landing.test".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "landing");
    assert_eq!(updated.sort_order, "1");
    assert!(updated.has_link);
    assert_eq!(updated.link_url.as_deref(), Some("https://landing.test"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_link_cleared_when_turned_off(pool: PgPool) {
    let item = PortfolioRepo::create(&pool, &new_item("shop", "1")).await.unwrap();
    let linked = UpdatePortfolioItem {
        has_link: Some(true),
        link_url: Some(Some("https://shop.test".to_string())),
        ..Default::default()
    };
    PortfolioRepo::update(&pool, item.id, &linked).await.unwrap().unwrap();

    // Omitting link_url keeps it.
    let renamed = PortfolioRepo::update(
        &pool,
        item.id,
        &UpdatePortfolioItem {
            title: Some("store".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.link_url.as_deref(), Some("https://shop.test"));

    // Turning the link off drops the stale URL.
    let unlinked = PortfolioRepo::update(
        &pool,
        item.id,
        &UpdatePortfolioItem {
            has_link: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!unlinked.has_link);
    assert!(unlinked.link_url.is_none());

    // An explicit clear works while the flag stays on.
    PortfolioRepo::update(&pool, item.id, &linked).await.unwrap().unwrap();
    let cleared = PortfolioRepo::update(
        &pool,
        item.id,
        &UpdatePortfolioItem {
            link_url: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(cleared.has_link);
    assert!(cleared.link_url.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_unknown_id(pool: PgPool) {
    let updated = PortfolioRepo::update(&pool, 999_999, &UpdatePortfolioItem::default())
        .await
        .unwrap();
    assert!(updated.is_none());
    assert!(!PortfolioRepo::delete(&pool, 999_999).await.unwrap());
    assert!(PortfolioRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_portfolio_delete(pool: PgPool) {
    let item = PortfolioRepo::create(&pool, &new_item("gone", "1")).await.unwrap();
    assert!(PortfolioRepo::delete(&pool, item.id).await.unwrap());
    assert!(PortfolioRepo::find_by_id(&pool, item.id).await.unwrap().is_none());
    assert!(!PortfolioRepo::delete(&pool, item.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_service_create_keeps_includes(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Websites", "1"))
        .await
        .unwrap();
    assert_eq!(service.includes, vec!["Design", "Build"]);

    let found = ServiceRepo::find_by_id(&pool, service.id).await.unwrap().unwrap();
    assert_eq!(found.price, "from $500");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_service_partial_update_replaces_includes(pool: PgPool) {
    let service = ServiceRepo::create(&pool, &new_service("Bots", "2")).await.unwrap();

    let updated = ServiceRepo::update(
        &pool,
        service.id,
        &UpdateService {
            includes: Some(vec!["Support".to_string()]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.includes, vec!["Support"]);
    assert_eq!(updated.title, "Bots");
    assert_eq!(updated.work_format, "Remote");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_service_list_and_delete(pool: PgPool) {
    let b = ServiceRepo::create(&pool, &new_service("B", "b")).await.unwrap();
    ServiceRepo::create(&pool, &new_service("A", "a")).await.unwrap();

    let titles: Vec<String> = ServiceRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["A", "B"]);

    assert!(ServiceRepo::delete(&pool, b.id).await.unwrap());
    assert_eq!(ServiceRepo::list(&pool).await.unwrap().len(), 1);
}
