//! Post resource handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, Post, PostPatch};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        date: post.date,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(&path).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = NewPost::new(req.title.unwrap_or_default(), req.content.unwrap_or_default());

    let post = state.posts.create(input).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };

    let post = state.posts.update(&path, patch).await?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;
    tracing::info!(post_id = %path, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
