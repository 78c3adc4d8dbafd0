//! CLI commands for rotas

pub mod dispatch;
pub mod nodes;
pub mod path;
pub mod routes;
