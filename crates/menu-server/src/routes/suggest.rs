use axum::extract::{Path, Query, State};
use axum::Json;
use menu_core::picker::{daily_menu, suggest};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, serde::Deserialize)]
pub struct DrawParams {
    /// Fixed seed for a repeatable draw.
    pub seed: Option<u64>,
    /// Day to plan for (YYYY-MM-DD); defaults to today, local time.
    pub date: Option<chrono::NaiveDate>,
}

impl DrawParams {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

/// GET /api/suggest/:category: one random option, `null` when the list is empty.
pub async fn suggest_category(
    State(app): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<DrawParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let store = app.open_store()?;
        store.check_category(&category)?;
        let pick = suggest(store.catalog(), &category, &mut params.rng());
        Ok::<_, menu_core::MenuError>(serde_json::json!({
            "category": category,
            "option": pick,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/today: one suggestion per category.
pub async fn today(
    State(app): State<AppState>,
    Query(params): Query<DrawParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        let store = app.open_store()?;
        let date = params
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let categories = app.config.display_categories(&store);
        let menu = daily_menu(store.catalog(), &categories, date, &mut params.rng());
        Ok::<_, menu_core::MenuError>(serde_json::to_value(menu)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
