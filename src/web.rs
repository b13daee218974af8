use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use chrono::Local;
use serde::Deserialize;
use std::sync::Mutex;

use crate::error::ScheduleError;
use crate::parser::{load_schedule, load_schedule_from_bytes, REQUIRED_COLUMNS};
use crate::schedule::ScheduleTable;
use crate::view::render;

/// Pre-bundled list used when no upload has happened yet.
pub const DEFAULT_FILE: &str = "lista.csv";

/// Shared state: the current table, replaced wholesale on each
/// successful upload. No other state crosses render passes.
pub struct AppState {
    pub table: Mutex<Option<ScheduleTable>>,
}

#[derive(Deserialize)]
pub struct ViewQuery {
    name: Option<String>,
}

// Dashboard state for today, rendered server-side as a ViewModel.
async fn get_view(
    query: web::Query<ViewQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let table = state.table.lock().unwrap();

    match table.as_ref() {
        Some(table) => {
            let today = Local::now().date_naive();
            let vm = render(table, today, query.name.as_deref());
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "loaded": true,
                "view": vm,
            })))
        }
        // Not an error: the page stays interactive and prompts for an
        // upload until a list arrives.
        None => Ok(HttpResponse::Ok().json(serde_json::json!({
            "loaded": false,
            "message": ScheduleError::NoDataLoaded.to_string(),
        }))),
    }
}

// Distinct names for the person selector.
async fn get_people(state: web::Data<AppState>) -> Result<HttpResponse> {
    let table = state.table.lock().unwrap();

    match table.as_ref() {
        Some(table) => Ok(HttpResponse::Ok().json(table.names())),
        None => Ok(HttpResponse::Ok().json(Vec::<String>::new())),
    }
}

// CSV upload. The new table replaces the old one only when the build
// succeeds; a rejected file leaves the previous list in place.
async fn upload(body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse> {
    match load_schedule_from_bytes(&body) {
        Ok(new_table) => {
            log::info!("lista actualizada: {} filas", new_table.len());
            *state.table.lock().unwrap() = Some(new_table);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "message": "Lista actualizada manualmente."
            })))
        }
        Err(e) => {
            log::warn!("archivo rechazado: {}", e);
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.to_string(),
                "required_columns": REQUIRED_COLUMNS,
            })))
        }
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    // Auto-load the bundled list when present; its absence just means
    // the page starts in the upload prompt.
    let initial = if std::path::Path::new(DEFAULT_FILE).exists() {
        match load_schedule(DEFAULT_FILE) {
            Ok(table) => {
                log::info!("lista cargada automáticamente: {} filas", table.len());
                Some(table)
            }
            Err(e) => {
                log::warn!("no se pudo cargar {}: {}", DEFAULT_FILE, e);
                None
            }
        }
    } else {
        None
    };

    let app_state = web::Data::new(AppState {
        table: Mutex::new(initial),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .route("/api/view", web::get().to(get_view))
            .route("/api/people", web::get().to(get_people))
            .route("/api/upload", web::post().to(upload))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, test};

    fn state_with_table() -> web::Data<AppState> {
        let csv = "fecha,nombre,telefono,departamento\n\
                   2024-03-15,Ana,0991112222,Ventas\n\
                   2024-03-18,Bruno,0993334444,Compras\n";
        web::Data::new(AppState {
            table: Mutex::new(Some(load_schedule_from_bytes(csv.as_bytes()).unwrap())),
        })
    }

    #[actix_web::test]
    async fn view_without_data_prompts_for_upload() {
        let state = web::Data::new(AppState {
            table: Mutex::new(None),
        });
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/view", web::get().to(get_view)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/view").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["loaded"], false);
    }

    #[actix_web::test]
    async fn upload_replaces_table_and_reports_rows() {
        let state = web::Data::new(AppState {
            table: Mutex::new(None),
        });
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .route("/api/upload", web::post().to(upload)),
        )
        .await;
        let csv = "fecha,nombre,telefono,departamento\n2024-03-15,Ana,099,Ventas\n";
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .set_payload(csv)
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["success"], true);
        assert!(state.table.lock().unwrap().is_some());
    }

    #[actix_web::test]
    async fn bad_upload_keeps_previous_table() {
        let state = state_with_table();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .route("/api/upload", web::post().to(upload)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/upload")
            .set_payload("fecha,nombre\nx,y\n")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        // The old list survives a rejected upload.
        assert_eq!(state.table.lock().unwrap().as_ref().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn people_lists_distinct_names() {
        let state = state_with_table();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/people", web::get().to(get_people)),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/people").to_request();
        let resp: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp, vec!["Ana", "Bruno"]);
    }
}
