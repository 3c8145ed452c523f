pub mod http_teamcity_async_client;
pub mod query;
pub mod teamcity_async_client;
pub mod teamcity_endpoint;
pub mod teamcity_model;
