/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description : 플랫폼 지표 이력을 조회해서 대시보드용 이중 축 차트 이미지를 생성

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::metric_store_repository_impl::*;

mod env_configuration;

mod traits;

mod dto;

mod enums;

mod model;
use model::configs::{chart_render_config::*, metric_store_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, metric_query_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Platform metrics chart generation start!");

    /* 필수 설정은 파이프라인 실행 전에 검증한다 */
    let store_config: MetricStoreConfig = MetricStoreConfig::from_env().unwrap_or_else(|e| {
        let err_msg: &str = "[main] Missing or invalid metric store configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let render_config: ChartRenderConfig = ChartRenderConfig::load().unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while loading the chart render configuration.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    let metric_repo: MetricStoreRepositoryImpl = MetricStoreRepositoryImpl::new(&store_config)
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing metric_repo.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let metric_query_service: MetricQueryServiceImpl<MetricStoreRepositoryImpl> =
        MetricQueryServiceImpl::new(metric_repo);
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(render_config.clone());

    let main_controller: MainController<
        MetricQueryServiceImpl<MetricStoreRepositoryImpl>,
        ChartServiceImpl,
    > = MainController::new(metric_query_service, chart_service, render_config);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
