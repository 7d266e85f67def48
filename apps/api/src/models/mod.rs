pub mod chat;
pub mod roadmap;
