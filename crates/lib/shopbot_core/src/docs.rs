//! Static reference documentation for the product chat service.

use crate::config::{CHAT_ENDPOINT, PRODUCTS_ENDPOINT, SWAGGER_PATH};

/// Questions the service is known to answer well.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "Tell me about Kiwi",
    "What's the price of mascara?",
    "Do you have any electronics?",
    "Show me products with ratings above 4",
    "What furniture do you have?",
];

const PRODUCTS_EXAMPLE: &str = r#"{
  "products": [
    {
      "id": 1,
      "title": "Product Name",
      "description": "Product description",
      "category": "category",
      "price": 9.99,
      "rating": 4.5,
      "stock": 100,
      "brand": "Brand Name",
      "tags": ["tag1", "tag2"],
      "warrantyInformation": "1 year warranty",
      "shippingInformation": "Ships in 1-2 days",
      "availabilityStatus": "In Stock"
    }
  ],
  "total": 194,
  "skip": 0,
  "limit": 30
}"#;

const CHAT_REQUEST_EXAMPLE: &str = r#"{
  "message": "Tell me about Kiwi"
}"#;

const CHAT_RESPONSE_EXAMPLE: &str = r#"{
  "response": "Kiwi is a nutrient-rich fruit priced at $2.49, rated 4.93 stars by our customers. It ships overnight and comes with a 6-month warranty. We currently have 99 units in stock."
}"#;

/// Render the endpoint documentation for a service at `base_url`.
pub fn api_docs(base_url: &str) -> String {
    let questions: String = EXAMPLE_QUESTIONS
        .iter()
        .map(|q| format!("  - \"{q}\"\n"))
        .collect();

    format!(
        "API Documentation
=================

Overview
--------
The product chat API provides endpoints for fetching product information and
interacting with an AI-powered chatbot that answers questions about products.

Base URL: {base_url}

GET {PRODUCTS_ENDPOINT}
-----------------
Fetch all products.

Response (200 OK):
{PRODUCTS_EXAMPLE}

Example request:
  curl -X GET {base_url}{PRODUCTS_ENDPOINT}

POST {CHAT_ENDPOINT}
--------------
Send a message to the chatbot and receive an AI-generated response about products.

Request body:
{CHAT_REQUEST_EXAMPLE}

Response (200 OK):
{CHAT_RESPONSE_EXAMPLE}

Example request:
  curl -X POST {base_url}{CHAT_ENDPOINT} \\
    -H \"Content-Type: application/json\" \\
    -d '{{\"message\": \"What is the price of mascara?\"}}'

Example questions:
{questions}
Interactive documentation
-------------------------
For interactive API testing, visit the Swagger UI: {base_url}{SWAGGER_PATH}
"
    )
}
