use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseReducerDispatcher;

use crate::error::{CatalogError, Result};
use crate::model::{CatalogAction, CatalogState, ProjectRecord, parse_catalog};

/// Fetches and decodes the catalog. Exactly one request, no retry, no timeout.
pub async fn fetch_catalog(url: &str) -> Result<Vec<ProjectRecord>> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(CatalogError::Http {
            status: resp.status(),
            status_text: resp.status_text(),
        });
    }
    let body = resp.text().await?;
    parse_catalog(&body)
}

/// Spawns the load and reports the outcome to the catalog reducer.
pub fn load_catalog(url: String, dispatcher: UseReducerDispatcher<CatalogState>) {
    spawn_local(async move {
        match fetch_catalog(&url).await {
            Ok(projects) => {
                log::info!("loaded {} projects from {}", projects.len(), url);
                dispatcher.dispatch(CatalogAction::Loaded(projects));
            }
            Err(e) => {
                log::error!("error loading projects: {}", e);
                dispatcher.dispatch(CatalogAction::Failed(e.to_string()));
            }
        }
    });
}
