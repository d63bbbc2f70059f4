use std::net::TcpListener;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_lab::middleware::from_fn;
use secrecy::ExposeSecret;
use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use crate::authentication::reject_anonymous_users;
use crate::configuration::DatabaseSettings;
use crate::configuration::Settings;
use crate::routes::create_project;
use crate::routes::delete_project;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::login;
use crate::routes::login_form;
use crate::routes::logout;
use crate::routes::project_by_id;
use crate::routes::project_page;
use crate::routes::submit_project;

/// Wrapper for actix's `Server` with access to the bound port. Binding to
/// port 0 hands out a random free port, which the test suite relies on.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;
        let port = listener.local_addr()?.port();

        // connect_lazy: nothing talks to postgres until the first query, so
        // db-free requests (health_check, the form page for an anonymous
        // visitor) work even while the db is down
        let pool = get_connection_pool(&cfg.database);

        let server = run(listener, pool, cfg.application.cookie_secret)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Consumes `self`; call last (or hand to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

pub fn get_connection_pool(db_cfg: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new().connect_lazy_with(db_cfg.connection())
}

/// Declares all endpoints and middleware. The same `cookie_secret` signs the
/// session cookie and the flash-message cookie; both stores are client-side,
/// so the server keeps no per-visitor state at all.
///
/// Panics if `cookie_secret` is shorter than 64 bytes (`Key::from`).
pub fn run(
    listener: TcpListener,
    pool: PgPool,
    cookie_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let secret_key = Key::from(cookie_secret.expose_secret().as_bytes());

    let cookie_store = CookieMessageStore::builder(secret_key.clone()).build();
    let msg_framework = FlashMessagesFramework::builder(cookie_store).build();

    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(msg_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            // the handler itself copes with anonymous visitors
            .route("/logout", web::post().to(logout))
            // posting is the only gated surface
            .service(
                web::resource("/projects")
                    .wrap(from_fn(reject_anonymous_users))
                    .route(web::post().to(submit_project)),
            )
            .route("/projects/{id}", web::get().to(project_page))
            .service(
                web::scope("/api")
                    .route("/projects", web::post().to(create_project))
                    .route("/projects/{id}", web::get().to(project_by_id))
                    .route("/projects/{id}", web::delete().to(delete_project)),
            )
            .app_data(pool.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
