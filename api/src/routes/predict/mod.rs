pub mod part_price_route;
pub mod predict_request;
pub mod repair_time_route;
pub mod tyre_check_route;
