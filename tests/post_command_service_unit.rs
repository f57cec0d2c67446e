use std::sync::Arc;

mod support;

use inkpress_core::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, UpdatePostCommand,
};
use inkpress_core::application::commands::categories::CreateCategoryCommand;
use inkpress_core::application::error::ApplicationError;
use inkpress_core::domain::errors::DomainError;
use inkpress_core::domain::post::{PostReadRepository, PostWriteRepository};
use support::{
    InMemoryCategoryRepo, InMemoryPopupRepo, RacingPostRepo, TestStores, build_services,
    fixed_now_millis,
};

async fn seed_category(stores: &TestStores) -> i64 {
    stores
        .services()
        .category_commands
        .create_category(CreateCategoryCommand {
            name: "General".into(),
            ..Default::default()
        })
        .await
        .expect("category")
        .id
}

fn post(title: &str, category_id: i64) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        description: "Body text".into(),
        category_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn colliding_titles_get_increasing_suffixes() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let created = services
            .post_commands
            .create_post(post("Hello World", category))
            .await
            .unwrap();
        slugs.push(created.slug);
    }

    assert_eq!(slugs, ["hello-world", "hello-world-1", "hello-world-2"]);
}

#[tokio::test]
async fn titles_are_transliterated() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;

    let created = stores
        .services()
        .post_commands
        .create_post(post("Café René", category))
        .await
        .unwrap();

    assert_eq!(created.slug, "cafe-rene");
}

#[tokio::test]
async fn title_without_slug_material_gets_timestamp_placeholder() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;

    let created = stores
        .services()
        .post_commands
        .create_post(post("!!!", category))
        .await
        .unwrap();

    assert_eq!(created.slug, format!("item-{}", fixed_now_millis()));
}

#[tokio::test]
async fn explicit_slug_is_normalized_and_deduplicated() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();

    let first = services
        .post_commands
        .create_post(CreatePostCommand {
            slug: Some("  My Custom Slug ".into()),
            ..post("Anything", category)
        })
        .await
        .unwrap();
    let second = services
        .post_commands
        .create_post(CreatePostCommand {
            slug: Some("my-custom-slug".into()),
            ..post("Something else", category)
        })
        .await
        .unwrap();

    assert_eq!(first.slug, "my-custom-slug");
    assert_eq!(second.slug, "my-custom-slug-1");
}

#[tokio::test]
async fn blank_slug_override_falls_back_to_title() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;

    let created = stores
        .services()
        .post_commands
        .create_post(CreatePostCommand {
            slug: Some("   ".into()),
            ..post("From Title", category)
        })
        .await
        .unwrap();

    assert_eq!(created.slug, "from-title");
}

#[tokio::test]
async fn blank_title_is_a_validation_error() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;

    let err = stores
        .services()
        .post_commands
        .create_post(post("   ", category))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert!(stores.posts.slugs().is_empty());
}

#[tokio::test]
async fn update_with_same_title_keeps_slug() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();
    let created = services
        .post_commands
        .create_post(post("Stable", category))
        .await
        .unwrap();

    let updated = services
        .post_commands
        .update_post(UpdatePostCommand {
            id: created.id,
            title: "Stable".into(),
            description: "New body".into(),
            category_id: category,
            is_featured: true,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "stable");
    assert_eq!(updated.description, "New body");
    assert!(updated.is_featured);
}

#[tokio::test]
async fn retitled_post_does_not_collide_with_itself() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();
    let created = services
        .post_commands
        .create_post(post("Hello World", category))
        .await
        .unwrap();

    // Different title, same normalized slug.
    let updated = services
        .post_commands
        .update_post(UpdatePostCommand {
            id: created.id,
            title: "Hello, World!".into(),
            description: "Body text".into(),
            category_id: category,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "hello-world");
}

#[tokio::test]
async fn retitled_post_avoids_other_posts_slugs() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();
    services
        .post_commands
        .create_post(post("Taken", category))
        .await
        .unwrap();
    let other = services
        .post_commands
        .create_post(post("Other", category))
        .await
        .unwrap();

    let updated = services
        .post_commands
        .update_post(UpdatePostCommand {
            id: other.id,
            title: "Taken".into(),
            description: "Body text".into(),
            category_id: category,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "taken-1");
}

#[tokio::test]
async fn explicit_slug_on_update_wins_over_title() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();
    let created = services
        .post_commands
        .create_post(post("Original", category))
        .await
        .unwrap();

    let updated = services
        .post_commands
        .update_post(UpdatePostCommand {
            id: created.id,
            title: "Renamed".into(),
            slug: Some("hand-picked".into()),
            description: "Body text".into(),
            category_id: category,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, "hand-picked");
}

#[tokio::test]
async fn updating_missing_post_is_not_found() {
    let stores = TestStores::new();

    let err = stores
        .services()
        .post_commands
        .update_post(UpdatePostCommand {
            id: 999,
            title: "Ghost".into(),
            description: "Body".into(),
            category_id: 1,
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_post_and_reports_missing_ones() {
    let stores = TestStores::new();
    let category = seed_category(&stores).await;
    let services = stores.services();
    let created = services
        .post_commands
        .create_post(post("Short Lived", category))
        .await
        .unwrap();

    services
        .post_commands
        .delete_post(DeletePostCommand { id: created.id })
        .await
        .unwrap();
    assert!(stores.posts.slugs().is_empty());

    let err = services
        .post_commands
        .delete_post(DeletePostCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn lost_write_race_is_resolved_again() {
    let racing = Arc::new(RacingPostRepo::new());
    let post_write: Arc<dyn PostWriteRepository> = racing.clone();
    let post_read: Arc<dyn PostReadRepository> = racing.clone();
    let services = build_services(
        post_write,
        post_read,
        Arc::new(InMemoryCategoryRepo::new()),
        Arc::new(InMemoryPopupRepo::new()),
    );

    let created = services
        .post_commands
        .create_post(post("Contended", 1))
        .await
        .unwrap();

    assert_eq!(created.slug, "contended-1");
    assert_eq!(racing.inner.slugs(), ["contended", "contended-1"]);
}
