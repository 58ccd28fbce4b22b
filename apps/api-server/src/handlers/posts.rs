//! Guestbook post handlers.

use actix_web::{HttpResponse, web};

use guestbook_shared::ApiResponse;
use guestbook_shared::dto::{
    AddPostQuery, DeleteQuery, DeleteResponse, HeartQuery, HeartResponse, SearchQuery,
};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET|POST /add?user=<name>&message=<body>
pub async fn add(
    state: web::Data<AppState>,
    request_id: RequestId,
    query: web::Query<AddPostQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let post = state.guestbook.add(&query.user, &query.message).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = post.id,
        "Guestbook entry saved"
    );

    let message = format!("{} saved", post.name);
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(post, message)))
}

/// GET /list - every post, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.guestbook.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /search?q=<substring>
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.guestbook.search(&query.q).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .guestbook
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET|POST /delete?id=<id> or /delete?name=<name>
///
/// Deleting something that does not exist reports `deleted: 0`.
pub async fn delete(
    state: web::Data<AppState>,
    query: web::Query<DeleteQuery>,
) -> AppResult<HttpResponse> {
    let deleted = match query.into_inner() {
        DeleteQuery { id: Some(id), .. } => state.guestbook.delete_by_id(id).await?,
        DeleteQuery {
            name: Some(name), ..
        } => state.guestbook.delete_by_name(&name).await?,
        DeleteQuery {
            id: None,
            name: None,
        } => {
            return Err(AppError::BadRequest(
                "either id or name is required".to_string(),
            ));
        }
    };

    Ok(HttpResponse::Ok().json(DeleteResponse { deleted }))
}

/// GET|POST /heart?id=<id>
pub async fn heart(
    state: web::Data<AppState>,
    query: web::Query<HeartQuery>,
) -> AppResult<HttpResponse> {
    let id = query.id;
    let heart = state.guestbook.increment(id).await?;
    Ok(HttpResponse::Ok().json(HeartResponse { id, heart }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use guestbook_core::domain::Post;
    use serde_json::Value;

    use crate::handlers::configure_routes;
    use crate::observability::RequestIdMiddleware;
    use crate::state::AppState;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn test_add_then_list() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::get()
            .uri("/add?user=alice&message=hello%20there")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "alice saved");
        assert_eq!(body["data"]["body"], "hello there");
        assert_eq!(body["data"]["heart"], 0);

        let req = test::TestRequest::get().uri("/list").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].name, "alice");
    }

    #[actix_rt::test]
    async fn test_add_accepts_post() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::post()
            .uri("/add?user=bob&message=hi")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[actix_rt::test]
    async fn test_add_without_message_is_bad_request() {
        let state = AppState::in_memory();
        let app = app!(state.clone());

        let req = test::TestRequest::get().uri("/add?user=alice").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");

        assert!(state.guestbook.list().await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_search() {
        let state = AppState::in_memory();
        state.guestbook.add("alice", "rust is fun").await.unwrap();
        state.guestbook.add("bob", "go is fine").await.unwrap();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/search?q=rust").to_request();
        let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].name, "alice");

        let req = test::TestRequest::get().uri("/search?q=").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_heart() {
        let state = AppState::in_memory();
        let post = state.guestbook.add("alice", "like this").await.unwrap();
        let app = app!(state);

        for expected in 1..=2 {
            let req = test::TestRequest::get()
                .uri(&format!("/heart?id={}", post.id))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["id"], post.id);
            assert_eq!(body["heart"], expected);
        }

        let req = test::TestRequest::get().uri("/heart?id=999").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_heart_with_malformed_id() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::get().uri("/heart?id=abc").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["type"], "about:blank");
    }

    #[actix_rt::test]
    async fn test_delete_by_id_and_name() {
        let state = AppState::in_memory();
        let first = state.guestbook.add("alice", "one").await.unwrap();
        state.guestbook.add("spam", "two").await.unwrap();
        state.guestbook.add("spam", "three").await.unwrap();
        let app = app!(state.clone());

        let req = test::TestRequest::get()
            .uri(&format!("/delete?id={}", first.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], 1);

        let req = test::TestRequest::get()
            .uri(&format!("/delete?id={}", first.id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], 0);

        let req = test::TestRequest::post()
            .uri("/delete?name=spam")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["deleted"], 2);

        assert!(state.guestbook.list().await.unwrap().is_empty());

        let req = test::TestRequest::get().uri("/delete").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_get_post_by_id() {
        let state = AppState::in_memory();
        let post = state.guestbook.add("alice", "hi").await.unwrap();
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", post.id))
            .to_request();
        let found: Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found, post);

        let req = test::TestRequest::get().uri("/posts/12345").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_health_reports_storage() {
        let app = app!(AppState::in_memory());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }
}
