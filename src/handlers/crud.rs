use actix_web::{web, HttpResponse};
use log::info;

use crate::db::repository::{ChildTable, Repository};
use crate::errors::AppError;
use crate::handlers::Resource;
use crate::models::user::User;

pub fn parse_id(raw: &str, param: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}", param)))
}

fn not_found<T: Resource>() -> AppError {
    AppError::NotFound(format!("{} not found", T::LABEL))
}

// Parent-scoped routes answer 404 for an unknown user, never an empty list.
async fn require_user(users: &Repository<User>, raw: &str) -> Result<i64, AppError> {
    let user_id = parse_id(raw, User::ID_PARAM)?;
    match users.find_by_id(user_id).await? {
        Some(_) => Ok(user_id),
        None => Err(not_found::<User>()),
    }
}

// GET /api/{resource}
pub async fn get_all<T: Resource>(
    repo: web::Data<Repository<T>>,
) -> Result<HttpResponse, AppError> {
    let rows = repo.get_all().await?;
    Ok(HttpResponse::Ok().json(rows))
}

// GET /api/{resource}/{id}
pub async fn get_by_id<T: Resource>(
    repo: web::Data<Repository<T>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id, T::ID_PARAM)?;
    let row = repo.find_by_id(id).await?.ok_or_else(not_found::<T>)?;
    Ok(HttpResponse::Ok().json(row))
}

// POST /api/{resource}
pub async fn create<T: Resource>(
    repo: web::Data<Repository<T>>,
    payload: web::Json<T>,
) -> Result<HttpResponse, AppError> {
    let saved = repo.save(&payload).await?;
    info!("Created {} via POST", T::LABEL);
    Ok(HttpResponse::Ok().json(saved))
}

// PATCH /api/{resource}/{id}
pub async fn update<T: Resource>(
    repo: web::Data<Repository<T>>,
    id: web::Path<String>,
    payload: web::Json<T>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id, T::ID_PARAM)?;
    if repo.update_by_id(id, &payload).await? == 0 {
        return Err(not_found::<T>());
    }

    let refreshed = match repo.find_by_id(id).await? {
        Some(row) => row,
        None => payload.into_inner().with_id(id),
    };
    Ok(HttpResponse::Ok().json(refreshed))
}

// DELETE /api/{resource}/{id}
pub async fn delete<T: Resource>(
    repo: web::Data<Repository<T>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&id, T::ID_PARAM)?;
    if repo.delete_by_id(id).await? == 0 {
        return Err(not_found::<T>());
    }
    Ok(HttpResponse::NoContent().finish())
}

// GET /api/users/{user_id}/{resource}
pub async fn get_by_user<T: Resource + ChildTable>(
    users: web::Data<Repository<User>>,
    repo: web::Data<Repository<T>>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = require_user(&users, &user_id).await?;
    let rows = repo.find_by_user_id(user_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

// DELETE /api/users/{user_id}/{resource}
pub async fn delete_by_user<T: Resource + ChildTable>(
    users: web::Data<Repository<User>>,
    repo: web::Data<Repository<T>>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = require_user(&users, &user_id).await?;
    let deleted = repo.delete_by_user_id(user_id).await?;
    info!("Deleted {} {} row(s) for user {}", deleted, T::LABEL, user_id);
    Ok(HttpResponse::NoContent().finish())
}
