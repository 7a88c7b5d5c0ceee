pub mod cart_service;
pub mod stock_service;
