//! Blog endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::{ApiError, ErrorResponse};
use crate::storage::{BlogPost, BlogPostPatch, NewBlogPost};
use crate::web::extract::{ValidatedJson, ValidatedQuery};
use crate::web::state::AppState;
use crate::web::types::BlogQuery;

/// List blog posts, drafts included unless `published` is given
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "Blog",
    params(BlogQuery),
    responses(
        (status = 200, description = "Matching posts in creation order", body = Vec<BlogPost>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BlogQuery>,
) -> Json<Vec<BlogPost>> {
    Json(state.store.blog_posts_matching(&query.to_filter()))
}

#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "Blog",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Blog post", body = BlogPost),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .store
        .get::<BlogPost>(&id)
        .map(Json)
        .ok_or_else(ApiError::not_found::<BlogPost>)
}

#[utoipa::path(
    post,
    path = "/api/blog",
    tag = "Blog",
    request_body = NewBlogPost,
    responses(
        (status = 201, description = "Post created", body = BlogPost),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewBlogPost>,
) -> (StatusCode, Json<BlogPost>) {
    let post: BlogPost = state.store.create(new);
    info!(
        id = %post.id,
        author = %post.author,
        published = post.published,
        "Blog post created"
    );
    (StatusCode::CREATED, Json(post))
}

#[utoipa::path(
    patch,
    path = "/api/blog/{id}",
    tag = "Blog",
    params(("id" = String, Path, description = "Post id")),
    request_body = BlogPostPatch,
    responses(
        (status = 200, description = "Updated post", body = BlogPost),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<BlogPostPatch>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.store.update::<BlogPost>(&id, patch)?;
    info!(id = %id, published = post.published, "Blog post updated");
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "Blog",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete::<BlogPost>(&id) {
        return Err(ApiError::not_found::<BlogPost>());
    }
    info!(id = %id, "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}
