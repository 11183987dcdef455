use server::error::AppError;
use server::utils::authoring::{create_entry, create_user, find_user_by_username, update_entry};
use server::utils::entry::{ENTRY_HISTORY_LIMIT, entry_history};

use crate::common::TestApp;

mod users {
    use super::*;

    #[tokio::test]
    async fn created_user_can_be_found_by_username() {
        let app = TestApp::spawn().await;

        let user = create_user(&app.db, "zoidberg", "zoidberg@example.com")
            .await
            .unwrap();
        let found = find_user_by_username(&app.db, "zoidberg").await.unwrap();

        assert_eq!(found.id, user.id);
        assert_eq!(found.email, "zoidberg@example.com");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let app = TestApp::spawn().await;
        create_user(&app.db, "zoidberg", "").await.unwrap();

        let err = create_user(&app.db, "zoidberg", "").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn invalid_username_is_rejected() {
        let app = TestApp::spawn().await;

        let err = create_user(&app.db, "no spaces!", "").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unknown_username_is_not_found() {
        let app = TestApp::spawn().await;

        let err = find_user_by_username(&app.db, "nobody").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
    }
}

mod entries {
    use super::*;

    #[tokio::test]
    async fn new_entry_gets_slug_and_timestamps() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;

        let entry = create_entry(&app.db, author.id, "My entry title", "Body")
            .await
            .unwrap();

        assert_eq!(entry.slug, "my-entry-title");
        assert_eq!(entry.title, "My entry title");
        assert_eq!(entry.author_id, author.id);
        assert_eq!(entry.created_at, entry.modified_at);
        assert!(entry.get_absolute_url().ends_with(&format!("/{}-my-entry-title/", entry.id)));
    }

    #[tokio::test]
    async fn entry_with_unknown_author_is_not_found() {
        let app = TestApp::spawn().await;

        let err = create_entry(&app.db, 42, "Title", "Body").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;

        let err = create_entry(&app.db, author.id, "   ", "Body").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn overlong_title_is_rejected() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;

        let err = create_entry(&app.db, author.id, &"a".repeat(501), "Body")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn duplicate_titles_share_a_slug() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;

        let first = app.create_entry(&author, "Same title", "One").await;
        let second = app.create_entry(&author, "Same title", "Two").await;

        assert_eq!(first.slug, second.slug);
        assert_ne!(first.get_absolute_url(), second.get_absolute_url());
    }

    #[tokio::test]
    async fn update_rederives_slug_and_touches_modified_at() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Old title", "Old body").await;

        let updated = update_entry(&app.db, entry.id, "New title", "New body")
            .await
            .unwrap();

        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.slug, "new-title");
        assert_eq!(updated.body, "New body");
        assert_eq!(updated.created_at, entry.created_at);
        assert!(updated.modified_at >= entry.modified_at);
    }

    #[tokio::test]
    async fn updating_missing_entry_is_not_found() {
        let app = TestApp::spawn().await;

        let err = update_entry(&app.db, 7, "Title", "Body").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn history_is_empty_without_entries() {
        let app = TestApp::spawn().await;

        assert!(entry_history(&app.db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_returns_newest_entries_up_to_the_limit() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let mut ids = Vec::new();
        for n in 1..=7 {
            ids.push(app.create_entry(&author, &format!("Entry {n}"), "body").await.id);
        }

        let history = entry_history(&app.db).await.unwrap();

        assert_eq!(history.len(), ENTRY_HISTORY_LIMIT as usize);
        let expected: Vec<i32> = ids.iter().rev().take(5).copied().collect();
        let actual: Vec<i32> = history.iter().map(|e| e.id).collect();
        assert_eq!(actual, expected);
    }
}
