use rocket::{Catcher, Request};

#[catch(404)]
fn not_found(req: &Request) -> String {
    format!("No route for '{}'", req.uri())
}

#[catch(422)]
fn unprocessable(req: &Request) -> String {
    format!("Could not understand '{}'", req.uri())
}

#[catch(500)]
fn internal_error() -> &'static str {
    "Internal server error"
}

pub fn all() -> Vec<Catcher> {
    catchers![not_found, unprocessable, internal_error]
}
