mod application;
mod domain;
mod infrastructure;
mod interfaces;

use crate::application::ReportUseCase;
use crate::infrastructure::config::Settings;
use crate::infrastructure::dataset::DatasetLoader;
use crate::interfaces::http::{start_server, HttpState};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = Settings::load().expect("Failed to load settings");

    let state = HttpState {
        report_use_case: ReportUseCase::new(DatasetLoader::new(settings.dataset_path.clone())),
    };

    let server = start_server(state, &settings.host, settings.port)?;
    info!(
        "Report server listening on http://{}:{} (dataset: {})",
        settings.host,
        settings.port,
        settings.dataset_path.display()
    );

    server.await
}
