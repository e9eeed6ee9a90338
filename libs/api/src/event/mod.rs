use axum::Json;

pub mod response;

use self::response::EventResponse;

/// List events
///
/// The request is never read, so every method, query and body gets the same
/// answer.
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (
            status = 200,
            description = "List events successfully",
            body = EventResponse
        )
    )
)]
pub async fn get_events() -> Json<EventResponse> {
    Json(EventResponse::fixed())
}

#[cfg(test)]
mod test {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use super::response::{EventRecord, EventResponse};
    use crate::{router, Config};

    const EXPECTED: &str = concat!(
        r#"{"status":"success","region":"IND","events":["#,
        r#"{"title":"TEST EVENT 1","#,
        r#""banner":"https://i.imgur.com/6Q9Z8Zl.png"}]}"#,
    );

    fn app() -> Router {
        router(&Config::default()).unwrap()
    }

    async fn call(
        app: Router,
        request: Request<Body>,
    ) -> (StatusCode, String, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_events() {
        // Arrange
        let request = Request::builder()
            .uri("/api/events")
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, content_type, body) = call(app(), request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, EXPECTED);
    }

    #[tokio::test]
    async fn test_post_events_ignores_body() {
        // Arrange
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/events?region=BR")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, "Bearer whatever")
            .body(Body::from(r#"{"region":"NA","events":[]}"#))
            .unwrap();

        // Act
        let (status, _, body) = call(app(), request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, EXPECTED);
    }

    #[tokio::test]
    async fn test_every_method_gets_the_same_body() {
        for method in [
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ] {
            // Arrange
            let request = Request::builder()
                .method(method.clone())
                .uri("/events")
                .body(Body::from("not json at all"))
                .unwrap();

            // Act
            let (status, _, body) = call(app(), request).await;

            // Assert
            assert_eq!(status, StatusCode::OK, "{method}");
            assert_eq!(body, EXPECTED, "{method}");
        }
    }

    #[tokio::test]
    async fn test_options_with_origin_only_reaches_handler() {
        // Arrange
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/events")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, content_type, body) = call(app(), request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, EXPECTED);
    }

    #[tokio::test]
    async fn test_head_events() {
        // Arrange
        let request = Request::builder()
            .method(Method::HEAD)
            .uri("/api/events")
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, content_type, body) = call(app(), request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_identical() {
        // Arrange
        let app = app();
        let request = || {
            Request::builder()
                .uri("/api/events")
                .body(Body::empty())
                .unwrap()
        };

        // Act
        let (a, b) = tokio::join!(
            call(app.clone(), request()),
            call(app.clone(), request())
        );

        // Assert
        assert_eq!(a, b);
        assert_eq!(a.1, "application/json");
        assert_eq!(a.2, EXPECTED);
    }

    #[tokio::test]
    async fn test_body_round_trips() {
        // Arrange
        let request = Request::builder()
            .uri("/api/events")
            .body(Body::empty())
            .unwrap();

        // Act
        let (_, _, body) = call(app(), request).await;
        let parsed = serde_json::from_str::<EventResponse>(&body).unwrap();

        // Assert
        assert_eq!(parsed, EventResponse::fixed());
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.region, "IND");
        assert_eq!(
            parsed.events,
            vec![EventRecord {
                title: "TEST EVENT 1".to_string(),
                banner: "https://i.imgur.com/6Q9Z8Zl.png".to_string(),
            }]
        );
    }
}
