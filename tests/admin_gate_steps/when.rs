//! When steps for administrative gate BDD scenarios.

use super::world::{AdminGateWorld, ObservedResponse, run_async};
use axum::{
    body::Body,
    http::{Request, header},
};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use std::sync::Arc;
use tower::ServiceExt;
use wordbank::{
    config::{APP_ENV_KEY, AppConfig},
    http::{AppState, create_router},
    server_state::adapters::memory::InMemoryServerStateRepository,
    vocab::adapters::memory::InMemoryVocabRepository,
};

#[when(r#"a client requests "{path}""#)]
fn client_requests(world: &mut AdminGateWorld, path: String) -> Result<(), eyre::Report> {
    let app_env = world.app_env.clone();
    let config = AppConfig::from_lookup(|key| {
        if key == APP_ENV_KEY {
            app_env.clone()
        } else {
            None
        }
    })
    .wrap_err("load configuration for gate scenario")?;

    let state = AppState::new(
        Arc::new(InMemoryVocabRepository::new()),
        Arc::new(InMemoryServerStateRepository::new()),
        config.autocomplete_limit(),
    );
    let router = create_router(state, config.admin_gate());
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .wrap_err("build gate scenario request")?;

    let response = run_async(router.oneshot(request)).wrap_err("route gate scenario request")?;
    world.response = Some(ObservedResponse {
        status: response.status(),
        location: response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
    });
    Ok(())
}
