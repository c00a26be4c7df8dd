use actix_web::{web, HttpResponse, Responder};
use common::config::ClientConfig;

pub(crate) async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
