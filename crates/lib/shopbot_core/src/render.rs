//! Plain-text renderers for the transcript, API trace and product listing.
//!
//! All functions here are pure: the same input always renders the same text.

use chrono::Local;
use serde_json::Value;

use crate::config::SWAGGER_PATH;
use crate::models::{ApiLogEntry, Message, ProductsResponse};
use crate::session::SessionState;

/// Shown in place of an empty transcript.
pub const WELCOME: &str = "Welcome! Ask me anything about our products. Try asking about specific items, categories or prices.";

/// Shown in place of an empty API trace.
pub const NO_API_CALLS: &str =
    "No API calls yet. Start chatting to see live API requests and responses!";

/// Render one transcript message as a single labelled line.
pub fn render_message(message: &Message) -> String {
    match message.timestamp {
        Some(ts) => format!(
            "[{}] {}: {}",
            ts.with_timezone(&Local).format("%H:%M:%S"),
            message.role.label(),
            message.content
        ),
        None => format!("{}: {}", message.role.label(), message.content),
    }
}

/// Render the whole transcript, plus a typing indicator while loading.
pub fn render_transcript(state: &SessionState) -> String {
    let mut out = String::new();
    if state.transcript().is_empty() && !state.is_loading() {
        out.push_str(WELCOME);
        out.push('\n');
        return out;
    }

    for message in state.transcript() {
        out.push_str(&render_message(message));
        out.push('\n');
    }
    if state.is_loading() {
        out.push_str("Assistant: ...\n");
    }
    out
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render one API trace entry.
pub fn render_log_entry(entry: &ApiLogEntry) -> String {
    format!(
        "{}  {} {}  {}\nRequest:\n{}\nResponse:\n{}\n",
        entry.timestamp,
        entry.request.method,
        entry.request.endpoint,
        entry.response.status,
        pretty(&entry.request.body),
        pretty(&entry.response.data),
    )
}

/// Render the live API trace, followed by a pointer to the service's
/// interactive documentation.
pub fn render_api_log(logs: &[ApiLogEntry], base_url: &str) -> String {
    let mut out = String::new();
    if logs.is_empty() {
        out.push_str(NO_API_CALLS);
        out.push('\n');
    } else {
        for (i, entry) in logs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&render_log_entry(entry));
        }
    }
    out.push_str(&format!(
        "\nFor interactive Swagger documentation, visit: {base_url}{SWAGGER_PATH}\n"
    ));
    out
}

/// Render a product listing, one product per line.
pub fn render_products(listing: &ProductsResponse) -> String {
    let mut out = format!(
        "Showing {} of {} products (skip {}, limit {})\n",
        listing.products.len(),
        listing.total,
        listing.skip,
        listing.limit
    );
    for p in &listing.products {
        out.push_str(&format!(
            "#{} {} [{}] ${:.2} | {}/5 | {} in stock",
            p.id, p.title, p.category, p.price, p.rating, p.stock
        ));
        if let Some(status) = &p.availability_status {
            out.push_str(" | ");
            out.push_str(status);
        }
        out.push('\n');
    }
    out
}
