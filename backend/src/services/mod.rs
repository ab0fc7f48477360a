//! HTTP endpoint layer.
//!
//! `configure` registers the extractor configuration and every area's
//! `configure_routes()` scope, so `main.rs` and the tests build the same app.
//! Scopes are registered from the narrowest prefix to the widest:
//!
//! - `/api/inquiry` (`inquiry`)
//! - `/api/testimonials`, `/api/menu`, `/api/events`, `/api/gallery` (`content`)
//! - `/` and `/test` (`status`)
//!
//! Malformed query strings and JSON bodies are answered with `422` and a
//! `{"detail": ...}` body, like every other client error.

mod content;
mod inquiry;
mod status;

use crate::error::ApiError;
use actix_web::web::{self, ServiceConfig};

/// Request bodies are small JSON objects.
const JSON_LIMIT: usize = 64 * 1024;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT).error_handler(
        |err, _req| ApiError::InvalidPayload(err.to_string()).into(),
    ))
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::InvalidPayload(err.to_string()).into()),
    )
    .service(inquiry::configure_routes())
    .service(content::configure_routes())
    .service(status::configure_routes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::seed::seed_default_content;
    use crate::state::AppState;
    use crate::store::{to_document, DocumentStore, Filter};
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;
    use chrono::{TimeZone, Utc};
    use jefferson_common::model::{Collection, Event, GalleryItem, Inquiry, MenuItem, Testimonial};
    use serde::Serialize;
    use serde_json::{json, Value};

    macro_rules! app {
        ($state:expr) => {
            init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure),
            )
            .await
        };
    }

    fn state(store: DocumentStore) -> AppState {
        AppState::new(
            store,
            Config {
                database_url: Some(":memory:".to_string()),
                database_name: Some("jefferson".to_string()),
                ..Config::default()
            },
        )
    }

    fn store_with<T: Collection + Serialize>(records: &[T]) -> DocumentStore {
        let store = DocumentStore::open_in_memory().unwrap();
        for record in records {
            store
                .insert(T::NAME, to_document(T::NAME, record).unwrap())
                .unwrap();
        }
        store
    }

    fn seeded_store() -> DocumentStore {
        let store = DocumentStore::open_in_memory().unwrap();
        seed_default_content(&store).unwrap();
        store
    }

    fn assert_no_ids(items: &Value) {
        for item in items.as_array().unwrap() {
            assert!(item.get("_id").is_none(), "identity leaked: {item}");
        }
    }

    #[actix_web::test]
    async fn root_reports_liveness() {
        let app = app!(state(DocumentStore::open_in_memory().unwrap()));
        let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Jefferson Bar & Grill API running"}));
    }

    #[actix_web::test]
    async fn testimonial_round_trips_without_identity() {
        let testimonial = Testimonial {
            author: "Sam".to_string(),
            quote: "Best wings in town.".to_string(),
            rating: 4,
            source: None,
        };
        let app = app!(state(store_with(&[testimonial.clone()])));

        let resp = call_service(&app, TestRequest::get().uri("/api/testimonials").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        assert_no_ids(&body);

        let listed: Vec<Testimonial> = serde_json::from_value(body).unwrap();
        assert_eq!(listed, vec![testimonial]);
    }

    #[actix_web::test]
    async fn event_round_trips_with_timestamps() {
        let event = Event {
            title: "NYE Countdown".to_string(),
            description: None,
            start_time: Utc.with_ymd_and_hms(2026, 12, 31, 21, 0, 0).unwrap(),
            end_time: Some(Utc.with_ymd_and_hms(2027, 1, 1, 1, 0, 0).unwrap()),
            location: "Patio".to_string(),
            is_holiday_special: true,
            image_url: Some("/images/nye.jpg".to_string()),
        };
        let app = app!(state(store_with(&[event.clone()])));

        let req = TestRequest::get().uri("/api/events?holiday_only=true").to_request();
        let body: Value = read_body_json(call_service(&app, req).await).await;
        assert_no_ids(&body);

        let listed: Vec<Event> = serde_json::from_value(body).unwrap();
        assert_eq!(listed, vec![event]);
    }

    #[actix_web::test]
    async fn gallery_filters_by_exact_category() {
        let items = [
            GalleryItem {
                title: "Booths".to_string(),
                image_url: "/images/booths.jpg".to_string(),
                category: Some("interior".to_string()),
            },
            GalleryItem {
                title: "Front Door".to_string(),
                image_url: "/images/door.jpg".to_string(),
                category: Some("exterior".to_string()),
            },
        ];
        let app = app!(state(store_with(&items)));

        let req = TestRequest::get().uri("/api/gallery?category=exterior").to_request();
        let body: Value = read_body_json(call_service(&app, req).await).await;
        assert_no_ids(&body);

        let listed: Vec<GalleryItem> = serde_json::from_value(body).unwrap();
        assert_eq!(listed, vec![items[1].clone()]);
    }

    #[actix_web::test]
    async fn menu_lists_all_or_one_category() {
        let app = app!(state(seeded_store()));

        let req = TestRequest::get().uri("/api/menu").to_request();
        let all: Vec<MenuItem> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(all.len(), 4);

        let req = TestRequest::get().uri("/api/menu?category=Cocktails").to_request();
        let body: Value = read_body_json(call_service(&app, req).await).await;
        assert_no_ids(&body);
        let cocktails: Vec<MenuItem> = serde_json::from_value(body).unwrap();
        assert_eq!(cocktails.len(), 2);
        assert!(cocktails.iter().all(|m| m.category == "Cocktails"));

        let req = TestRequest::get().uri("/api/menu?category=cocktails").to_request();
        let none: Vec<MenuItem> = read_body_json(call_service(&app, req).await).await;
        assert!(none.is_empty());
    }

    #[actix_web::test]
    async fn menu_item_round_trips_with_tags() {
        let item = MenuItem {
            name: "Brisket Plate".to_string(),
            description: Some("Twelve-hour smoke".to_string()),
            price: 18.5,
            category: "Grills".to_string(),
            is_seasonal: false,
            tags: vec!["smoked".to_string(), "house favorite".to_string()],
        };
        let app = app!(state(store_with(&[item.clone()])));

        let req = TestRequest::get().uri("/api/menu?category=Grills").to_request();
        let listed: Vec<MenuItem> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(listed, vec![item]);
    }

    #[actix_web::test]
    async fn events_holiday_flag_filters_only_when_true() {
        let store = seeded_store();
        let regular = Event {
            title: "Open Mic".to_string(),
            description: None,
            start_time: Utc.with_ymd_and_hms(2026, 11, 5, 20, 0, 0).unwrap(),
            end_time: None,
            location: "The Jefferson Bar & Grill".to_string(),
            is_holiday_special: false,
            image_url: None,
        };
        store
            .insert(Event::NAME, to_document(Event::NAME, &regular).unwrap())
            .unwrap();
        let app = app!(state(store));

        let req = TestRequest::get().uri("/api/events").to_request();
        let all: Vec<Event> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(all.len(), 3);

        let req = TestRequest::get().uri("/api/events?holiday_only=false").to_request();
        let all: Vec<Event> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(all.len(), 3);

        let req = TestRequest::get().uri("/api/events?holiday_only=true").to_request();
        let holiday: Vec<Event> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(holiday.len(), 2);
        assert!(holiday.iter().all(|e| e.is_holiday_special));
    }

    #[actix_web::test]
    async fn limit_truncates_results() {
        let app = app!(state(seeded_store()));

        let req = TestRequest::get().uri("/api/menu?limit=3").to_request();
        let items: Vec<MenuItem> = read_body_json(call_service(&app, req).await).await;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Smash Burger");
    }

    #[actix_web::test]
    async fn negative_limit_is_read_as_its_magnitude() {
        let app = app!(state(seeded_store()));

        let req = TestRequest::get().uri("/api/menu?limit=-2").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let items: Vec<MenuItem> = read_body_json(resp).await;
        assert_eq!(items.len(), 2);
    }

    #[actix_web::test]
    async fn unknown_paths_are_not_found() {
        let app = app!(state(seeded_store()));

        for uri in ["/api/unknown", "/nothing-here"] {
            let resp = call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn malformed_query_is_a_client_error() {
        let app = app!(state(seeded_store()));

        for uri in ["/api/menu?limit=abc", "/api/events?holiday_only=maybe"] {
            let resp = call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            let body: Value = read_body_json(resp).await;
            assert!(body["detail"].is_string());
        }
    }

    #[actix_web::test]
    async fn invalid_stored_document_is_a_server_error() {
        let store = DocumentStore::open_in_memory().unwrap();
        let bad = json!({"author": "Bot", "quote": "10/10", "rating": 9});
        store
            .insert(Testimonial::NAME, bad.as_object().unwrap().clone())
            .unwrap();
        let app = app!(state(store));

        let resp = call_service(&app, TestRequest::get().uri("/api/testimonials").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn reads_fail_loudly_without_a_store() {
        let app = app!(state(DocumentStore::disconnected()));

        let resp = call_service(&app, TestRequest::get().uri("/api/gallery").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["detail"], json!("document store is not available"));
    }

    #[actix_web::test]
    async fn inquiry_with_bad_email_is_rejected_before_writing() {
        let store = DocumentStore::open_in_memory().unwrap();
        let app = app!(state(store.clone()));

        let req = TestRequest::post()
            .uri("/api/inquiry")
            .set_json(json!({
                "name": "Dana",
                "email": "not-an-email",
                "message": "Private party?"
            }))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.count(Inquiry::NAME).unwrap(), 0);
    }

    #[actix_web::test]
    async fn inquiry_missing_message_is_rejected() {
        let store = DocumentStore::open_in_memory().unwrap();
        let app = app!(state(store.clone()));

        let req = TestRequest::post()
            .uri("/api/inquiry")
            .set_json(json!({"name": "Dana", "email": "dana@example.com"}))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.count(Inquiry::NAME).unwrap(), 0);
    }

    #[actix_web::test]
    async fn valid_inquiry_is_stored_once_with_website_source() {
        let store = DocumentStore::open_in_memory().unwrap();
        let app = app!(state(store.clone()));

        let req = TestRequest::post()
            .uri("/api/inquiry")
            .set_json(json!({
                "name": "Dana",
                "email": "dana@example.com",
                "message": "Private party for 20 on the 14th?",
                "phone": "555-0100"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = read_body_json(resp).await;
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["message"], json!("Thanks! We'll be in touch soon."));

        let stored = store.find(Inquiry::NAME, &Filter::new(), 0).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0]["source"], json!("website"));
        assert_eq!(stored[0]["phone"], json!("555-0100"));
        assert_eq!(stored[0]["email"], json!("dana@example.com"));
    }

    #[actix_web::test]
    async fn inquiry_store_failure_is_a_server_error() {
        let app = app!(state(DocumentStore::disconnected()));

        let req = TestRequest::post()
            .uri("/api/inquiry")
            .set_json(json!({
                "name": "Dana",
                "email": "dana@example.com",
                "message": "Hello"
            }))
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = read_body_json(resp).await;
        assert_eq!(body["detail"], json!("document store is not available"));
    }

    #[actix_web::test]
    async fn diagnostics_lists_collections_when_connected() {
        let app = app!(state(seeded_store()));

        let resp = call_service(&app, TestRequest::get().uri("/test").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;

        assert_eq!(body["backend"], json!("✅ Running"));
        assert_eq!(body["database"], json!("✅ Connected"));
        assert_eq!(body["database_url"], json!("✅ Set"));
        assert_eq!(body["database_name"], json!("✅ Set"));
        assert_eq!(
            body["collections"],
            json!(["event", "galleryitem", "menuitem", "testimonial"])
        );
    }

    #[actix_web::test]
    async fn diagnostics_survive_a_missing_store() {
        let app = app!(AppState::new(DocumentStore::disconnected(), Config::default()));

        let resp = call_service(&app, TestRequest::get().uri("/test").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;

        assert_eq!(body["database"], json!("❌ Not Initialized"));
        assert_eq!(body["database_url"], json!("❌ Not Set"));
        assert_eq!(body["database_name"], json!("❌ Not Set"));
        assert_eq!(body["collections"], json!([]));
    }
}
