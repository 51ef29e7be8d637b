//! Reusable OpenAPI response types for the error envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - validation failed",
    content_type = "application/json",
    example = json!({
        "status": "BAD_REQUEST",
        "errors": ["name: size must be between 1 and 50"],
        "path": "/api/category/save",
        "timestamp": "2026-01-01T12:00:00.000Z"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Entity not found",
    content_type = "application/json",
    example = json!({
        "status": "NOT_FOUND",
        "errors": ["Category with id 42 not found"],
        "path": "/api/category/get/42",
        "timestamp": "2026-01-01T12:00:00.000Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - unique key already taken",
    content_type = "application/json",
    example = json!({
        "status": "CONFLICT",
        "errors": ["Category with name 'Bebidas' already exists"],
        "path": "/api/category/save",
        "timestamp": "2026-01-01T12:00:00.000Z"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": "INTERNAL_SERVER_ERROR",
        "errors": ["Invalid id 'abc': invalid digit found in string"],
        "path": "/api/category/get/abc",
        "timestamp": "2026-01-01T12:00:00.000Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "status": "SERVICE_UNAVAILABLE",
        "errors": ["Service temporarily unavailable"],
        "path": "/ready",
        "timestamp": "2026-01-01T12:00:00.000Z"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
