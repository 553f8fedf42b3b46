//! JSON API over the post store.

use actix_web::{HttpResponse, web};

use blog_shared::ApiResponse;
use blog_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .store
        .list()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::list(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.store.create(body.into_inner().into()).await?;
    tracing::info!(post_id = %post.id, "Post created via API");

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostResponse::from(post))))
}
