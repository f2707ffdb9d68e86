use poem::Route;
use poem_openapi::OpenApiService;

use crate::api::home;

/// Assemble the route table: the home endpoint is the only registered route.
pub fn build(app_name: &str, addr: &str) -> Route {
    let api_service = OpenApiService::new(
        home::routes::Api::new(app_name),
        app_name,
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));

    Route::new().nest("/", api_service)
}
