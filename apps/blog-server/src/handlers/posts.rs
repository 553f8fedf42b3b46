//! HTML post handlers.

use actix_web::{HttpResponse, http::header, web};

use blog_shared::dto::{EditPostForm, NewPostForm};

use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.list().await?;
    Ok(html(views::index(&posts)))
}

/// GET /new
pub async fn new_form() -> HttpResponse {
    html(views::new_form())
}

/// GET /{id}
pub async fn show(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.store.get_by_id(&id).await?;
    Ok(html(views::show(&post)))
}

/// GET /{id}/edit
pub async fn edit(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.store.get_by_id(&id).await?;
    Ok(html(views::edit(&post)))
}

/// POST /
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<NewPostForm>,
) -> AppResult<HttpResponse> {
    let post = state.store.create(form.into_inner().into()).await?;
    tracing::info!(post_id = %post.id, "Post created");
    Ok(redirect_to_index())
}

/// PUT /{id}
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<EditPostForm>,
) -> AppResult<HttpResponse> {
    let post = state
        .store
        .update_by_id(&id, form.into_inner().into())
        .await?;
    tracing::info!(post_id = %post.id, "Post updated");
    Ok(redirect_to_index())
}

/// DELETE /{id}
///
/// A missing post is a 404, same as every other route.
pub async fn destroy(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    state.store.delete_by_id(&id).await?;
    tracing::info!(post_id = %id, "Post deleted");
    Ok(redirect_to_index())
}
