// vibe_shop/server/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, checkout_handlers, health_handlers, product_handlers};

// Body and path extraction failures use the same `{ "error": ... }` shape as every other error.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid payload: {}", err)).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid path parameter: {}", err)).into()
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_handlers::health_check_handler))
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
        )
        .service(
          web::scope("/cart")
            .route("", web::get().to(cart_handlers::list_cart_handler))
            .route("", web::post().to(cart_handlers::add_to_cart_handler))
            .route("/{line_id}", web::post().to(cart_handlers::update_cart_line_handler))
            .route("/{line_id}", web::delete().to(cart_handlers::remove_cart_line_handler)),
        )
        .route("/checkout", web::post().to(checkout_handlers::checkout_handler)),
    );
}
