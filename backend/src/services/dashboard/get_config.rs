use actix_web::{web, HttpResponse, Responder};
use common::model::config::DashboardConfig;

pub(crate) async fn process(config: web::Data<DashboardConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
