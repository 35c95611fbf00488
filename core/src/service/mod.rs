pub mod nutrition;
pub mod plan_service;
