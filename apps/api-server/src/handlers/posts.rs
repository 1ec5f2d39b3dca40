//! `/posts` resource handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, Post, PostChanges};
use blog_core::error::RepoError;
use blog_shared::dto::{AuthorName, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.author.full_name(),
        title: post.title.clone(),
        content: post.content.clone(),
        created: post.created.to_rfc3339(),
    }
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing `{}` in request body", field)))
}

fn required_author(value: Option<AuthorName>) -> AppResult<Author> {
    value
        .map(|a| Author::new(a.first_name, a.last_name))
        .filter(|a| !a.first_name.trim().is_empty() && !a.last_name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing `author` in request body".to_string()))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let title = required(req.title, "title")?;
    let content = required(req.content, "content")?;
    let author = required_author(req.author)?;

    let post = state
        .posts
        .insert(Post::new(author, title, content))
        .await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_response(&post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) values must match",
                id, body_id
            )));
        }
    }

    let changes = PostChanges {
        title: req.title,
        content: req.content,
        author: req.author.map(|a| Author::new(a.first_name, a.last_name)),
    };
    changes.validate()?;

    match state.posts.update(id, changes).await {
        Ok(_) => tracing::info!(post_id = %id, "Post updated"),
        Err(RepoError::NotFound) => {
            return Err(DomainError::NotFound {
                entity_type: "Post",
                id,
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting an unknown id is not an error.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
        Err(RepoError::NotFound) => tracing::debug!(post_id = %id, "Post already absent"),
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::NoContent().finish())
}
