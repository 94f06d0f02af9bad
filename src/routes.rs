use actix_web::{web, HttpResponse};
use sqlx::sqlite::SqlitePool;

use crate::db::repository::Repository;
use crate::errors::AppError;
use crate::handlers::{crud, users};
use crate::models::{activity::Activity, goal::Goal, measurement::Measurement, user::User};

/// Repository handles shared by every worker.
#[derive(Clone)]
pub struct Repositories {
    users: web::Data<Repository<User>>,
    activities: web::Data<Repository<Activity>>,
    goals: web::Data<Repository<Goal>>,
    measurements: web::Data<Repository<Measurement>>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Repositories {
            users: web::Data::new(Repository::new(pool.clone())),
            activities: web::Data::new(Repository::new(pool.clone())),
            goals: web::Data::new(Repository::new(pool.clone())),
            measurements: web::Data::new(Repository::new(pool)),
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.users.clone())
            .app_data(self.activities.clone())
            .app_data(self.goals.clone())
            .app_data(self.measurements.clone());
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    }))
    .service(
        web::scope("/api")
            // Users
            .service(
                web::resource("/users")
                    .route(web::get().to(crud::get_all::<User>))
                    .route(web::post().to(crud::create::<User>)),
            )
            .service(
                web::resource("/users/email/{email}")
                    .route(web::get().to(users::get_by_email)),
            )
            .service(
                web::resource("/users/{user_id}")
                    .route(web::get().to(crud::get_by_id::<User>))
                    .route(web::patch().to(crud::update::<User>))
                    .route(web::delete().to(crud::delete::<User>)),
            )
            .service(
                web::resource("/users/{user_id}/activities")
                    .route(web::get().to(crud::get_by_user::<Activity>))
                    .route(web::delete().to(crud::delete_by_user::<Activity>)),
            )
            .service(
                web::resource("/users/{user_id}/goals")
                    .route(web::get().to(crud::get_by_user::<Goal>))
                    .route(web::delete().to(crud::delete_by_user::<Goal>)),
            )
            .service(
                web::resource("/users/{user_id}/measurements")
                    .route(web::get().to(crud::get_by_user::<Measurement>))
                    .route(web::delete().to(crud::delete_by_user::<Measurement>)),
            )
            // Activities
            .service(
                web::resource("/activities")
                    .route(web::get().to(crud::get_all::<Activity>))
                    .route(web::post().to(crud::create::<Activity>)),
            )
            .service(
                web::resource("/activities/{activity_id}")
                    .route(web::get().to(crud::get_by_id::<Activity>))
                    .route(web::patch().to(crud::update::<Activity>))
                    .route(web::delete().to(crud::delete::<Activity>)),
            )
            // Goals
            .service(
                web::resource("/goals")
                    .route(web::get().to(crud::get_all::<Goal>))
                    .route(web::post().to(crud::create::<Goal>)),
            )
            .service(
                web::resource("/goals/{goal_id}")
                    .route(web::get().to(crud::get_by_id::<Goal>))
                    .route(web::patch().to(crud::update::<Goal>))
                    .route(web::delete().to(crud::delete::<Goal>)),
            )
            // Measurements
            .service(
                web::resource("/measurements")
                    .route(web::get().to(crud::get_all::<Measurement>))
                    .route(web::post().to(crud::create::<Measurement>)),
            )
            .service(
                web::resource("/measurements/{measurement_id}")
                    .route(web::get().to(crud::get_by_id::<Measurement>))
                    .route(web::patch().to(crud::update::<Measurement>))
                    .route(web::delete().to(crud::delete::<Measurement>)),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json("404 - Not Found")
}
