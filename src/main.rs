use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;

use likeat_admin::controllers::list::ResourceListController;
use likeat_admin::domain::ListRecord;
use likeat_admin::gateway::{CollectionGateway, SessionSink};
use likeat_admin::gateway::http::HttpApi;
use likeat_admin::models::config::AppConfig;
use likeat_admin::session::Session;

/// Lists one resource collection from the command line:
/// `likeat-admin <admins|customers|restaurants> [search] [page]`.
#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: AppConfig = match config::Config::builder()
        .add_source(config::Environment::with_prefix("LIKEAT"))
        .build()
        .and_then(config::Config::try_deserialize)
    {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut args = env::args().skip(1);
    let resource = args.next().unwrap_or_else(|| "restaurants".to_string());
    let search = args.next().unwrap_or_default();
    let page = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(1);

    let session = Arc::new(Session::new());
    if let Some(token) = &config.access_token {
        session.set_user_from_token(token);
    }
    let api = HttpApi::new(&config.api_base_url, Arc::clone(&session));

    match resource.as_str() {
        "admins" => {
            show(
                ResourceListController::new(Arc::new(api.admins()), "admin"),
                &search,
                page,
            )
            .await
        }
        "customers" => {
            show(
                ResourceListController::new(Arc::new(api.customers()), "customer"),
                &search,
                page,
            )
            .await
        }
        "restaurants" => {
            show(
                ResourceListController::new(Arc::new(api.restaurants()), "restaurant"),
                &search,
                page,
            )
            .await
        }
        other => {
            log::error!("Unknown resource: {other}");
            ExitCode::FAILURE
        }
    }
}

async fn show<T, G>(
    controller: ResourceListController<T, G>,
    search: &str,
    page: usize,
) -> ExitCode
where
    T: ListRecord + Serialize,
    G: CollectionGateway<T> + ?Sized,
{
    controller.load().await;
    if let Some(err) = controller.error() {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    controller.set_search_query(search);
    controller.set_page(page);

    let view = controller.view();
    println!("Page {} of {}", view.page, view.total_pages.max(1));
    for item in &view.items {
        match serde_json::to_string(item) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("Failed to render record: {err}"),
        }
    }

    ExitCode::SUCCESS
}
