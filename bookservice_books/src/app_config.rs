use paperclip::actix::web;

use crate::handlers;
use crate::links::BOOKS_PATH;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::scope(BOOKS_PATH)
                .service(web::resource("").route(web::post().to(handlers::create_book)))
                .service(
                    web::resource("/{isbn}")
                        .route(web::get().to(handlers::get_book))
                        .route(web::put().to(handlers::update_book_status))
                        .route(web::delete().to(handlers::delete_book)),
                ),
        );
}
