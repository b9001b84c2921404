use crate::application::{ChartReport, ReportUseCase};
use crate::domain::chart::ChartKind;
use crate::domain::error::Result;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use askama::Template;
use serde::Deserialize;
use tracing::error;

pub struct HttpState {
    pub report_use_case: ReportUseCase,
}

#[derive(Deserialize)]
pub struct ChartRequest {
    #[serde(default)]
    pub chart_type: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct ReportPage<'a> {
    graph_json: &'a str,
    chart_type: &'a str,
}

#[get("/")]
async fn report_page(data: web::Data<HttpState>) -> impl Responder {
    render_report(data, ChartKind::default()).await
}

#[post("/")]
async fn select_chart(
    data: web::Data<HttpState>,
    form: web::Form<ChartRequest>,
) -> impl Responder {
    let kind = ChartKind::parse(form.chart_type.as_deref());
    render_report(data, kind).await
}

async fn render_report(data: web::Data<HttpState>, kind: ChartKind) -> HttpResponse {
    // Dataset reads touch the filesystem on every request; keep them off
    // the async workers
    let result = web::block(move || data.report_use_case.execute(kind)).await;

    let report = match result {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            error!("Failed to build {} report: {}", kind.as_str(), e);
            return HttpResponse::InternalServerError().body(e.to_string());
        }
        Err(e) => {
            error!("Report worker failed: {}", e);
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };

    render_page(&report)
}

fn render_page(report: &ChartReport) -> HttpResponse {
    match page_html(report) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Failed to render {} report page: {}", report.kind.as_str(), e);
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

fn page_html(report: &ChartReport) -> Result<String> {
    let graph_json = report.figure.to_json()?;

    let page = ReportPage {
        graph_json: &graph_json,
        chart_type: report.kind.as_str(),
    };

    Ok(page.render()?)
}

pub fn start_server(state: HttpState, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(report_page)
            .service(select_chart)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}
