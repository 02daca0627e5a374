use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    models::{
        category::{Category, EditorCategorySchema},
        envelope::ResultEnvelope,
    },
    state::AppState,
    store::StoreError,
};

const NOT_FOUND: &str = "Contenido no encontrado!";

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(ResultEnvelope::<Category>::error(message))).into_response()
}

fn not_found() -> Response {
    fail(StatusCode::NOT_FOUND, NOT_FOUND)
}

// La ruta solo acepta ids enteros: cualquier otra cosa es 404
fn category_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, Response> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            tracing::debug!("Id de categoría inválido: {}", e.body_text());
            Err(not_found())
        }
    }
}

// JSON mal formado o campos obligatorios vacíos -> 400 con la lista de errores
fn validated(
    payload: Result<Json<EditorCategorySchema>, JsonRejection>,
) -> Result<EditorCategorySchema, Response> {
    let Json(body) = payload.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ResultEnvelope::<Category>::error(e.body_text())),
        )
            .into_response()
    })?;

    let errors = body.validate();
    if !errors.is_empty() {
        let body = Json(ResultEnvelope::<Category>::errors(errors));
        return Err((StatusCode::BAD_REQUEST, body).into_response());
    }

    Ok(body)
}

// GET /v1/categories (con caché de una hora)
pub async fn list_categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    let store = Arc::clone(&state.store);
    let categories = state
        .categories_cache
        .get_or_try_insert_with(async move { store.list().await.map(Arc::new) })
        .await;

    match categories {
        Ok(data) => (StatusCode::OK, Json(ResultEnvelope::ok(&*data))).into_response(),
        Err(e) => {
            tracing::error!("Error listando categorías: {:?}", e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X16 - Falla interna del servidor")
        }
    }
}

// GET /v1/categories/:id (sin caché)
pub async fn get_category_handler(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let id = match category_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.store.find(id).await {
        Ok(Some(category)) => (StatusCode::OK, Json(ResultEnvelope::ok(category))).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X15 - Falla interna del servidor!")
        }
    }
}

// POST /v1/categories
pub async fn create_category_handler(
    State(state): State<AppState>,
    payload: Result<Json<EditorCategorySchema>, JsonRejection>,
) -> impl IntoResponse {
    let body = match validated(payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let category = body.to_new_category();

    match state.store.insert(&category).await {
        Ok(created) => {
            state.categories_changed().await;
            tracing::info!("Categoría creada: {} ({})", created.slug, created.id);

            let location = format!("v1/categories/{}", created.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ResultEnvelope::ok(created)),
            )
                .into_response()
        }
        Err(StoreError::Write(e)) => {
            tracing::error!("No se pudo insertar la categoría {}: {}", category.slug, e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X09 - No fue posible incluir la categoría!")
        }
        Err(e) => {
            tracing::error!("Error creando categoría: {:?}", e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X10 - Falla interna del servidor")
        }
    }
}

// PUT /v1/categories/:id
pub async fn update_category_handler(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<EditorCategorySchema>, JsonRejection>,
) -> impl IntoResponse {
    let id = match category_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let body = match validated(payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    // Lectura y guardado son dos pasos separados, sin transacción
    let mut category = match state.store.find(id).await {
        Ok(Some(category)) => category,
        Ok(None) => return not_found(),
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            return fail(StatusCode::INTERNAL_SERVER_ERROR, "05X12 - Falla interna del servidor");
        }
    };

    body.apply_to(&mut category);

    match state.store.update(&category).await {
        Ok(updated) => {
            state.categories_changed().await;
            (StatusCode::OK, Json(ResultEnvelope::ok(updated))).into_response()
        }
        Err(StoreError::Write(e)) => {
            tracing::error!("No se pudo actualizar la categoría {}: {}", id, e);
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "05X11 - No fue posible modificar la categoría!",
            )
        }
        Err(e) => {
            tracing::error!("Error actualizando categoría {}: {:?}", id, e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X12 - Falla interna del servidor")
        }
    }
}

// DELETE /v1/categories/:id -> devuelve la categoría tal como estaba
pub async fn delete_category_handler(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let id = match category_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let category = match state.store.find(id).await {
        Ok(Some(category)) => category,
        Ok(None) => return not_found(),
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            return fail(StatusCode::INTERNAL_SERVER_ERROR, "05X14 - Falla interna del servidor");
        }
    };

    match state.store.remove(id).await {
        Ok(()) => {
            state.categories_changed().await;
            tracing::info!("Categoría eliminada: {} ({})", category.slug, id);
            (StatusCode::OK, Json(ResultEnvelope::ok(category))).into_response()
        }
        Err(StoreError::Write(e)) => {
            tracing::error!("No se pudo eliminar la categoría {}: {}", id, e);
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "05X13 - No fue posible eliminar la categoría!",
            )
        }
        Err(e) => {
            tracing::error!("Error eliminando categoría {}: {:?}", id, e);
            fail(StatusCode::INTERNAL_SERVER_ERROR, "05X14 - Falla interna del servidor")
        }
    }
}
