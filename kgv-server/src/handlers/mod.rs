//! Route handlers. All of them read the shared, frozen `GraphStore`.

pub mod edges;
pub mod graph;
pub mod nodes;
pub mod tooltip;

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use kgv_core::KgvError;

use crate::error::AppError;

/// Encode `value` up front so an encoding failure surfaces as an internal
/// error rather than a miss.
pub(crate) fn to_json<T>(what: &str, value: &T) -> Result<Json<Value>, AppError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map(Json).map_err(|source| {
        AppError(KgvError::Serialization {
            what: what.to_string(),
            source,
        })
    })
}
