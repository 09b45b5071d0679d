use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

fn category_json(category: &str, options: &[String]) -> serde_json::Value {
    serde_json::json!({
        "category": category,
        "options": options,
    })
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /api/catalog: every category in display order, plus where the data came from.
pub async fn get_catalog(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let store = app.open_store()?;
        let categories: Vec<serde_json::Value> = app
            .config
            .display_categories(&store)
            .iter()
            .map(|c| category_json(c, store.catalog().options(c)))
            .collect();
        Ok::<_, menu_core::MenuError>(serde_json::json!({
            "source": store.source(),
            "categories": categories,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/catalog/:category: options of one category.
pub async fn get_category(
    State(app): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let store = app.open_store()?;
        let options = store.list(&category)?;
        Ok::<_, menu_core::MenuError>(category_json(&category, options))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
pub struct AddBody {
    pub option: String,
}

/// POST /api/catalog/:category: add an option and persist.
pub async fn add_option(
    State(app): State<AppState>,
    Path(category): Path<String>,
    Json(body): Json<AddBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let _guard = app.lock_writes();
        let mut store = app.open_store()?;
        store.add_option(&category, &body.option)?;
        tracing::info!(category = %category, option = %body.option, "option added");
        Ok::<_, menu_core::MenuError>(category_json(&category, store.catalog().options(&category)))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// DELETE /api/catalog/:category/:option: remove an option and persist.
pub async fn remove_option(
    State(app): State<AppState>,
    Path((category, option)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let _guard = app.lock_writes();
        let mut store = app.open_store()?;
        store.remove_option(&category, &option)?;
        tracing::info!(category = %category, option = %option, "option removed");
        Ok::<_, menu_core::MenuError>(category_json(&category, store.catalog().options(&category)))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
