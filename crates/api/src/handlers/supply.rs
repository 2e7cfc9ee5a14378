use crate::{dto::SupplyResponse, state::AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    Json,
};
use coin_supply_domain::{format_supply, DomainError};
use tracing::{debug, error, instrument};

type ApiError = (StatusCode, String);

fn supply_error(e: DomainError) -> ApiError {
    match e {
        DomainError::StaleCache => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        e => {
            error!(error = %e, "Failed to read supply");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Whole coins in circulation as a bare integer.
///
/// The body is plain text but labelled `application/json`; the exchange
/// consuming this endpoint expects exactly that.
#[instrument(skip(state), name = "api_get_circulation")]
pub async fn get_circulation(
    State(state): State<AppState>,
) -> Result<([(header::HeaderName, &'static str); 1], String), ApiError> {
    let stats = state.get_supply.execute().await.map_err(supply_error)?;
    let circulation = stats.circulation();

    debug!(circulation = %circulation, "Circulation calculated");

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        circulation.to_string(),
    ))
}

#[instrument(skip(state), name = "api_get_circulating_supply")]
pub async fn get_circulating_supply(
    State(state): State<AppState>,
) -> Result<Json<SupplyResponse>, ApiError> {
    let stats = state.get_supply.execute().await.map_err(supply_error)?;
    let result = format_supply(stats.circulating_supply());

    debug!(circulating_supply = %result, "Circulating supply calculated");

    Ok(Json(SupplyResponse { result }))
}

#[instrument(skip(state), name = "api_get_total_supply")]
pub async fn get_total_supply(
    State(state): State<AppState>,
) -> Result<Json<SupplyResponse>, ApiError> {
    let stats = state.get_supply.execute().await.map_err(supply_error)?;
    let result = format_supply(stats.total_supply());

    debug!(total_supply = %result, "Total supply calculated");

    Ok(Json(SupplyResponse { result }))
}
