//! axum middleware applying the administrative gate to a router.

use crate::admin_gate::domain::{AdminGate, GateOutcome};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

/// Runs the wrapped handler only when the gate permits access.
///
/// Denied requests are answered with a temporary redirect to the not-found
/// page and never reach the inner service.
pub async fn enforce_admin_gate(
    State(gate): State<AdminGate>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    match gate.guard(request) {
        GateOutcome::Render(admitted) => next.run(admitted).await,
        GateOutcome::Redirect(target) => {
            info!(
                %path,
                redirect_to = target,
                "redirecting request away from administrative section"
            );
            Redirect::temporary(target).into_response()
        }
    }
}
