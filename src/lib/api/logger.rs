use log::info;
use rocket::fairing::AdHoc;

/// Logs every response as `METHOD uri => status`.
pub fn fairing() -> AdHoc {
    AdHoc::on_response("Request logger", |req, res| {
        Box::pin(async move {
            info!("{} {} => {}", req.method(), req.uri(), res.status());
        })
    })
}
