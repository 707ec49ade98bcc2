pub mod chat_message_route;
pub mod chat_request;
pub mod chat_start_route;
