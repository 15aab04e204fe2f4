use actix_web::web;

pub mod cafes;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(cafes::home))
        .route("/random", web::get().to(cafes::get_random_cafe))
        .route("/all", web::get().to(cafes::get_all_cafes))
        .route("/search", web::get().to(cafes::search_cafes))
        .route("/add", web::post().to(cafes::add_cafe))
        .route("/update-price/{cafe_id}", web::patch().to(cafes::update_price))
        .route(
            "/report-closed/{cafe_id}",
            web::delete().to(cafes::report_closed),
        );
}
