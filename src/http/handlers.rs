use crate::framework::CatalogClient;
use crate::http::ApiError;
use crate::model::{City, CityId, PointOfInterest, PointOfInterestDraft, PointOfInterestId};
use crate::patch::PatchOp;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, instrument};

type ApiResult<T> = Result<T, ApiError>;

pub(super) async fn list_cities(State(client): State<CatalogClient>) -> ApiResult<Json<Vec<City>>> {
    Ok(Json(client.list_cities().await?))
}

#[instrument(skip(client))]
pub(super) async fn get_city(
    State(client): State<CatalogClient>,
    Path(city_id): Path<u32>,
) -> ApiResult<Json<City>> {
    Ok(Json(client.get_city(CityId(city_id)).await?))
}

#[instrument(skip(client))]
pub(super) async fn list_points_of_interest(
    State(client): State<CatalogClient>,
    Path(city_id): Path<u32>,
) -> ApiResult<Json<Vec<PointOfInterest>>> {
    Ok(Json(client.list_points_of_interest(CityId(city_id)).await?))
}

#[instrument(skip(client))]
pub(super) async fn get_point_of_interest(
    State(client): State<CatalogClient>,
    Path((city_id, id)): Path<(u32, u32)>,
) -> ApiResult<Json<PointOfInterest>> {
    let poi = client
        .get_point_of_interest(CityId(city_id), PointOfInterestId(id))
        .await?;
    Ok(Json(poi))
}

#[instrument(skip(client, headers, payload))]
pub(super) async fn create_point_of_interest(
    State(client): State<CatalogClient>,
    Path(city_id): Path<u32>,
    headers: HeaderMap,
    payload: Result<Json<PointOfInterestDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let created = client
        .create_point_of_interest(CityId(city_id), draft)
        .await?;

    let location = location_of(&headers, city_id, created.id);
    debug!(%location, "Point of interest created");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[instrument(skip(client, payload))]
pub(super) async fn replace_point_of_interest(
    State(client): State<CatalogClient>,
    Path((city_id, id)): Path<(u32, u32)>,
    payload: Result<Json<PointOfInterestDraft>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(draft) = payload?;
    client
        .replace_point_of_interest(CityId(city_id), PointOfInterestId(id), draft)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(client, payload))]
pub(super) async fn patch_point_of_interest(
    State(client): State<CatalogClient>,
    Path((city_id, id)): Path<(u32, u32)>,
    payload: Result<Json<Vec<PatchOp>>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(ops) = payload?;
    client
        .patch_point_of_interest(CityId(city_id), PointOfInterestId(id), ops)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(client))]
pub(super) async fn delete_point_of_interest(
    State(client): State<CatalogClient>,
    Path((city_id, id)): Path<(u32, u32)>,
) -> ApiResult<StatusCode> {
    client
        .delete_point_of_interest(CityId(city_id), PointOfInterestId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Absolute URI of the created resource when the request names its host,
/// otherwise the path alone.
fn location_of(headers: &HeaderMap, city_id: u32, id: PointOfInterestId) -> String {
    let path = format!("/api/cities/{city_id}/pointsofinterest/{}", id.0);
    match headers.get(header::HOST).and_then(|host| host.to_str().ok()) {
        Some(host) => format!("http://{host}{path}"),
        None => path,
    }
}
