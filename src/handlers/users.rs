use actix_web::{web, HttpResponse};

use crate::db::repository::Repository;
use crate::errors::AppError;
use crate::models::user::User;

// GET /api/users/email/{email}
pub async fn get_by_email(
    users: web::Data<Repository<User>>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(user))
}
