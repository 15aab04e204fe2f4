use crate::config::AppConfig;
use crate::models::cafe::{AddCafe, Cafe};
use actix_web::{web, HttpResponse, Responder};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

#[derive(Deserialize)]
pub struct SearchParams {
    pub loc: Option<String>,
}

#[derive(Deserialize)]
pub struct PriceParams {
    pub price: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// Checkbox-style form fields coerce by presence: any non-empty value counts
/// as true, including the literal text "false". Only an absent or
/// empty-string field is false.
fn form_flag(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn get_random_cafe(pool: web::Data<SqlitePool>) -> impl Responder {
    let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafes")
        .fetch_all(pool.get_ref())
        .await;

    match cafes {
        Ok(cafes) => match cafes.choose(&mut rand::thread_rng()) {
            Some(cafe) => HttpResponse::Ok().json(json!({ "cafe": cafe })),
            // Empty table is not a business error here, it surfaces as a
            // plain server fault.
            None => HttpResponse::InternalServerError().json("No cafes in the database"),
        },
        Err(_) => HttpResponse::InternalServerError().json("Error fetching cafes"),
    }
}

pub async fn get_all_cafes(pool: web::Data<SqlitePool>) -> impl Responder {
    let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafes ORDER BY name")
        .fetch_all(pool.get_ref())
        .await;

    match cafes {
        Ok(cafes) => HttpResponse::Ok().json(json!({ "cafes": cafes })),
        Err(_) => HttpResponse::InternalServerError().json("Error fetching cafes"),
    }
}

pub async fn search_cafes(
    pool: web::Data<SqlitePool>,
    params: web::Query<SearchParams>,
) -> impl Responder {
    // A missing `loc` binds NULL, which equals no stored location.
    let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafes WHERE location = ?")
        .bind(&params.loc)
        .fetch_all(pool.get_ref())
        .await;

    match cafes {
        Ok(cafes) if !cafes.is_empty() => HttpResponse::Ok().json(json!({ "cafes": cafes })),
        // A miss keeps status 200; clients key off the error body.
        Ok(_) => HttpResponse::Ok().json(json!({
            "error": { "Not found": "Sorry, we don't have a cafe in that location." }
        })),
        Err(_) => HttpResponse::InternalServerError().json("Error fetching cafes"),
    }
}

pub async fn add_cafe(pool: web::Data<SqlitePool>, form: web::Form<AddCafe>) -> impl Responder {
    let result = sqlx::query(
        r#"
        INSERT INTO cafes (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.name)
    .bind(&form.map_url)
    .bind(&form.img_url)
    .bind(&form.loc)
    .bind(&form.seats)
    .bind(form_flag(form.toilet.as_deref()))
    .bind(form_flag(form.wifi.as_deref()))
    .bind(form_flag(form.sockets.as_deref()))
    .bind(form_flag(form.calls.as_deref()))
    .bind(&form.coffee_price)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(json!({
            "response": { "success": "Successfully added the new cafe." }
        })),
        // A duplicate name trips the UNIQUE constraint and lands here.
        Err(_) => HttpResponse::InternalServerError().json("Failed to insert cafe"),
    }
}

pub async fn update_price(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    params: web::Query<PriceParams>,
) -> impl Responder {
    let cafe_id = path.into_inner();

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(_) => return HttpResponse::InternalServerError().json("Failed to start transaction"),
    };

    match sqlx::query_as::<_, Cafe>("SELECT * FROM cafes WHERE id = ?")
        .bind(cafe_id)
        .fetch_optional(&mut *tx)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": { "Not found": "There is no cafe with this id" }
            }))
        }
        Err(_) => return HttpResponse::InternalServerError().json("Database error"),
    }

    // The raw query string is stored verbatim, numeric or not.
    if sqlx::query("UPDATE cafes SET coffee_price = ? WHERE id = ?")
        .bind(&params.price)
        .bind(cafe_id)
        .execute(&mut *tx)
        .await
        .is_err()
    {
        return HttpResponse::InternalServerError().json("Failed to update price");
    }

    if tx.commit().await.is_err() {
        return HttpResponse::InternalServerError().json("Failed to commit transaction");
    }

    HttpResponse::Ok().json(json!({ "success": "Successfully updated the price." }))
}

pub async fn report_closed(
    pool: web::Data<SqlitePool>,
    config: web::Data<AppConfig>,
    path: web::Path<i64>,
    params: web::Query<DeleteParams>,
) -> impl Responder {
    // Authorization comes first; an unauthorized caller learns nothing about
    // which ids exist.
    if params.api_key.as_deref() != Some(config.api_key.as_str()) {
        return HttpResponse::Forbidden().json(json!({
            "error": {
                "Not authorized": "You are not authorized to perform this request. \
                 Check if you have the valid API Key."
            }
        }));
    }

    let cafe_id = path.into_inner();

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(_) => return HttpResponse::InternalServerError().json("Failed to start transaction"),
    };

    match sqlx::query_as::<_, Cafe>("SELECT * FROM cafes WHERE id = ?")
        .bind(cafe_id)
        .fetch_optional(&mut *tx)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": { "Not found": "There is no cafe with this id" }
            }))
        }
        Err(_) => return HttpResponse::InternalServerError().json("Database error"),
    }

    if sqlx::query("DELETE FROM cafes WHERE id = ?")
        .bind(cafe_id)
        .execute(&mut *tx)
        .await
        .is_err()
    {
        return HttpResponse::InternalServerError().json("Failed to delete cafe");
    }

    if tx.commit().await.is_err() {
        return HttpResponse::InternalServerError().json("Failed to commit transaction");
    }

    HttpResponse::Ok().json(json!({ "success": "Successfully deleted the cafe" }))
}
