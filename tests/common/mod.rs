// common/mod.rs - Shared test utilities
//
// A throwaway products API served by actix-web on an ephemeral port, so the
// real HTTP client can be exercised without network access.

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::net::TcpListener;

pub const PRODUCTS_PATH: &str = "/api/v1/products";

/// A running mock of the products endpoint
pub struct MockApi {
    pub url: String,
    handle: ServerHandle,
}

impl MockApi {
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Serve `body` with `status` at `PRODUCTS_PATH` until stopped.
///
/// Must be called from within an actix runtime (`#[actix_web::test]`).
pub async fn spawn_mock_api(status: u16, body: &'static str) -> anyhow::Result<MockApi> {
    let status = StatusCode::from_u16(status)?;

    let server = HttpServer::new(move || {
        App::new().route(
            PRODUCTS_PATH,
            web::get().to(move || async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("mock API did not bind"))?;

    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok(MockApi {
        url: format!("http://{addr}{PRODUCTS_PATH}"),
        handle,
    })
}

/// URL on a local port with nothing listening
pub fn closed_port_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}{PRODUCTS_PATH}"))
}
