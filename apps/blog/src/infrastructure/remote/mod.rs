pub mod dir_data_source;
pub mod http_data_source;
pub mod simulated_transport;
