pub mod service_account_key;
pub mod token_exchange;
pub mod vision_request;
pub mod vision_response;
