use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;

use crate::auth::AuthService;
use crate::middleware::JwtMiddleware;
use crate::routes::{health_check, login, profile, refresh, register};

pub fn run(listener: TcpListener, auth: AuthService) -> Result<Server, std::io::Error> {
    let auth = web::Data::new(auth);

    let server = HttpServer::new(move || {
        App::new()
            // Shared state
            .app_data(auth.clone())

            // Public routes (no authentication required)
            .route("/health_check", web::get().to(health_check))
            .route("/auth/register", web::post().to(register))
            .route("/auth/login", web::post().to(login))
            .route("/auth/refresh", web::post().to(refresh))

            // Protected routes (require a valid access token)
            .service(
                web::scope("/auth")
                    .wrap(JwtMiddleware::new(auth.clone()))
                    .route("/profile", web::get().to(profile)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
