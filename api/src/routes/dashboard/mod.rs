pub mod dashboard_request;
pub mod dashboard_route;
