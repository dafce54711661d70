//! Post handlers - thin translators between HTTP and the record store.

use actix_web::{HttpResponse, web};

use blog_core::domain::{PostChanges, PostId};
use blog_shared::ApiResponse;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::render::post_response;
use crate::state::AppState;

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.load_all().await?;
    let body: Vec<PostResponse> = posts.posts().iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(&req.author, &req.title, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        post_response(&post),
        "Post created",
    )))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        author: req.author,
        title: req.title,
        content: req.content,
    };
    let post = state.posts.update(path.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

/// DELETE /api/posts/{id}
///
/// Succeeds whether or not the post existed.
pub async fn delete(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}

/// POST /api/posts/{id}/like
pub async fn like(state: web::Data<AppState>, path: web::Path<PostId>) -> AppResult<HttpResponse> {
    let post = state.posts.like(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post_response(&post))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use blog_infra::{InMemoryStorage, JsonFileStorage};

    use super::*;
    use crate::handlers::configure_routes;

    fn memory_state() -> AppState {
        AppState::with_storage(Arc::new(InMemoryStorage::new()))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"author": "A", "title": "T", "content": "C\nD"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["like"], 0);
        assert_eq!(body["data"]["content"], "C\nD");
        assert_eq!(body["data"]["content_html"], "C<br>D");

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["author"], "A");
    }

    #[actix_web::test]
    async fn test_create_missing_fields_is_422() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"author": "  ", "title": "T"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "empty field(s): author, content");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let app = app!(memory_state());

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_partial_and_errors() {
        let state = memory_state();
        state.posts.create("A", "T", "C").await.unwrap();
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({"title": "New"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "New");
        assert_eq!(body["data"]["author"], "A");

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({"content": " "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::put()
            .uri("/api/posts/9")
            .set_json(json!({"title": "X"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_like_and_delete() {
        let state = memory_state();
        state.posts.create("A", "T", "C").await.unwrap();
        let store = state.posts.clone();
        let app = app!(state);

        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/posts/1/like").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        assert_eq!(store.get(1).await.unwrap().like, 2);

        let req = test::TestRequest::post().uri("/api/posts/5/like").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
        assert!(store.load_all().await.unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_400() {
        let app = app!(memory_state());

        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_corrupt_store_is_500_without_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ broken").unwrap();
        let app = app!(AppState::with_storage(Arc::new(JsonFileStorage::new(&path))));

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        let text = String::from_utf8_lossy(&body);
        assert!(!text.contains("storage.json"));
        assert!(!text.contains("broken"));
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(memory_state());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
