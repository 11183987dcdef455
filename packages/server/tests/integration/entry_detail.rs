use chrono::Datelike;

use crate::common::{TestApp, routes};

mod detail_view {
    use super::*;

    #[tokio::test]
    async fn entry_page_shows_title_and_body() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "1-title", "1-body").await;

        let res = app.get(&entry.get_absolute_url()).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("1-title"));
        assert!(res.text.contains("1-body"));
        assert!(res.text.contains("No comments yet."));
    }

    #[tokio::test]
    async fn entry_page_has_exactly_one_form() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Title", "Body").await;

        let res = app.get(&entry.get_absolute_url()).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.form_count(), 1);
        assert!(res.text.contains("name=\"name\""));
        assert!(res.text.contains("name=\"email\""));
        assert!(res.text.contains("name=\"body\""));
    }

    #[tokio::test]
    async fn body_html_is_escaped() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Title", "<script>x</script>").await;

        let res = app.get(&entry.get_absolute_url()).await;

        assert!(!res.text.contains("<script>x</script>"));
        assert!(res.text.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn bare_id_resolves_the_entry() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Title", "Body").await;
        let date = entry.created_at.date_naive();

        let path = routes::entry_detail(
            &date.year().to_string(),
            &date.month().to_string(),
            &date.day().to_string(),
            &entry.id.to_string(),
        );
        let res = app.get(&path).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Body"));
    }

    #[tokio::test]
    async fn slug_resolves_the_entry_on_its_day() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "My entry title", "Slug body").await;
        let date = entry.created_at.date_naive();

        let path = routes::entry_detail(
            &date.year().to_string(),
            &date.month().to_string(),
            &date.day().to_string(),
            "my-entry-title",
        );
        let res = app.get(&path).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Slug body"));
    }

    #[tokio::test]
    async fn slug_starting_with_digits_resolves_the_entry() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "2014 recap", "Recap body").await;
        assert_eq!(entry.slug, "2014-recap");
        let date = entry.created_at.date_naive();

        let path = routes::entry_detail(
            &date.year().to_string(),
            &date.month().to_string(),
            &date.day().to_string(),
            "2014-recap",
        );
        let res = app.get(&path).await;

        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);
        assert!(res.text.contains("Recap body"));

        let res = app.get(&entry.get_absolute_url()).await;
        assert_eq!(res.status, 200);
        assert!(res.text.contains("Recap body"));
    }

    #[tokio::test]
    async fn digit_led_slug_wins_over_entry_with_that_id() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let first = app.create_entry(&author, "Other", "Other body").await;
        let second = app.create_entry(&author, "1 more thing", "More body").await;
        assert_eq!(second.slug, format!("{}-more-thing", first.id));
        let date = second.created_at.date_naive();

        let path = routes::entry_detail(
            &date.year().to_string(),
            &date.month().to_string(),
            &date.day().to_string(),
            &second.slug,
        );
        let res = app.get(&path).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("More body"));
        assert!(!res.text.contains("Other body"));
    }

    #[tokio::test]
    async fn old_url_still_resolves_after_title_edit() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Old title", "Old body").await;
        let old_url = entry.get_absolute_url();

        server::utils::authoring::update_entry(&app.db, entry.id, "New title", "New body")
            .await
            .unwrap();
        let res = app.get(&old_url).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("New body"));
    }

    #[tokio::test]
    async fn slug_on_another_day_is_not_found() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        app.create_entry(&author, "My entry title", "Body").await;

        let res = app
            .get(&routes::entry_detail("2001", "1", "1", "my-entry-title"))
            .await;

        assert_eq!(res.status, 404);
    }
}

mod not_found {
    use super::*;

    #[tokio::test]
    async fn missing_entry_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .get(&routes::entry_detail("2014", "1", "1", "999-missing"))
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn posting_to_missing_entry_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                &routes::entry_detail("2014", "1", "1", "999-missing"),
                &[("name", "Phillip"), ("email", "fry@example.com"), ("body", "hi")],
            )
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn posting_without_form_body_to_missing_entry_is_not_found() {
        let app = TestApp::spawn().await;
        let path = routes::entry_detail("2014", "1", "1", "999-missing");

        let res = app.post_raw(&path, None, "").await;
        assert_eq!(res.status, 404);

        let res = app.post_raw(&path, Some("text/plain"), "hello").await;
        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn malformed_year_is_not_found() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Title", "Body").await;

        let res = app
            .get(&routes::entry_detail("14", "1", "1", &entry.id.to_string()))
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn non_numeric_date_is_not_found() {
        let app = TestApp::spawn().await;
        let author = app.create_user("some_user").await;
        let entry = app.create_entry(&author, "Title", "Body").await;

        let res = app
            .get(&routes::entry_detail("abcd", "x", "y", &entry.id.to_string()))
            .await;

        assert_eq!(res.status, 404);
    }
}
