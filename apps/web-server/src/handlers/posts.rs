//! Post CRUD handlers - the five routes of the blog.

use actix_session::Session;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use askama::Template;

use quill_core::domain::{NewPost, Post};
use quill_core::forms::{PostForm, PostFormErrors};

use crate::flash::{Flash, set_flash, take_flash};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    posts: Vec<Post>,
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "create_post.html")]
struct CreatePostTemplate {
    form: PostForm,
    errors: PostFormErrors,
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "edit_post.html")]
struct EditPostTemplate {
    post_id: i64,
    form: PostForm,
    errors: PostFormErrors,
    flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "view_post.html")]
struct ViewPostTemplate {
    post: Post,
    flash: Option<Flash>,
}

fn page(template: impl Template) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(template.render()?))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// GET / and /home - all posts, newest first.
pub async fn home(state: web::Data<AppState>, session: Session) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    page(IndexTemplate {
        posts,
        flash: take_flash(&session),
    })
}

/// GET /create - empty post form.
pub async fn new_post(session: Session) -> AppResult<HttpResponse> {
    page(CreatePostTemplate {
        form: PostForm::default(),
        errors: PostFormErrors::default(),
        flash: take_flash(&session),
    })
}

/// POST /create - validate and store a new post.
pub async fn create_post(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        return page(CreatePostTemplate {
            form,
            errors,
            flash: None,
        });
    }

    state
        .posts
        .create(NewPost::new(form.title, form.content))
        .await?;

    set_flash(&session, "success", "Post created successfully.");
    Ok(redirect("/"))
}

/// GET /post/{post_id} - post detail page.
pub async fn view_post(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    page(ViewPostTemplate {
        post,
        flash: take_flash(&session),
    })
}

/// GET /post/{post_id}/edit - form pre-filled with the current fields.
pub async fn edit_post(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    page(EditPostTemplate {
        post_id: id,
        form: PostForm::prefilled(&post),
        errors: PostFormErrors::default(),
        flash: take_flash(&session),
    })
}

/// POST /post/{post_id}/edit - validate and rewrite title/content.
pub async fn update_post(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    // The post must exist before the input is looked at
    if state.posts.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return page(EditPostTemplate {
            post_id: id,
            form,
            errors,
            flash: None,
        });
    }

    state.posts.update(id, form.title, form.content).await?;

    set_flash(&session, "success", "Post updated successfully.");
    Ok(redirect(&format!("/post/{}", id)))
}

/// POST /post/{post_id}/delete - remove the post.
pub async fn delete_post(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    set_flash(&session, "success", "Post deleted successfully.");
    Ok(redirect("/"))
}
