//! Domain and wire models for the product chat service.

pub mod chat;
pub mod product;

pub use chat::{ApiLogEntry, ChatReply, ChatRequest, LoggedRequest, LoggedResponse, Message, Role};
pub use product::{Product, ProductsResponse};
