use crate::config::GeminiConfig;
use crate::error::ExtractionError;
use crate::search::traits::IntentExtractor;
use crate::search::types::ExtractedIntent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

/// Words the model uses to say "no constraint"
const UNCONSTRAINED_WORDS: &[&str] = &["any", "all", "todos", "todas", "cualquiera", "n/a"];

/// Longest error body kept from a failed response, in characters
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Intent extraction backed by the Gemini `generateContent` API
pub struct GeminiExtractor {
    client: Client,
    config: GeminiConfig,
}

impl GeminiExtractor {
    /// Create a new extractor. The request timeout applies to the whole call.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Whether an API key is available
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Run one extraction, surfacing the reason for any failure
    pub async fn try_extract(&self, query: &str) -> Result<ExtractedIntent, ExtractionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExtractionError::MissingApiKey)?;

        let request = build_request(query);
        let url = self.endpoint();

        debug!("Sending intent extraction request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let body = response.text().await.map_err(classify)?;
        debug!("Received {} bytes from Gemini", body.len());

        let envelope: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = envelope.text().ok_or(ExtractionError::EmptyResponse)?;

        parse_intent(&text)
    }
}

#[async_trait]
impl IntentExtractor for GeminiExtractor {
    async fn extract(&self, query: &str) -> Option<ExtractedIntent> {
        match self.try_extract(query).await {
            Ok(intent) => {
                info!(
                    "Extracted intent: operation={:?} type={:?} zone={:?} max_price={:?}",
                    intent.operation, intent.property_type, intent.zone, intent.max_price
                );
                Some(intent)
            }
            Err(ExtractionError::MissingApiKey) => {
                debug!("No API key configured, skipping intent extraction");
                None
            }
            Err(e) => {
                warn!("Intent extraction failed: {}", e);
                None
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "Gemini"
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}…", &body[..end]),
        None => body.to_string(),
    }
}

fn classify(err: reqwest::Error) -> ExtractionError {
    if err.is_timeout() {
        ExtractionError::Timeout
    } else {
        ExtractionError::Transport(err)
    }
}

fn build_request(query: &str) -> GenerateContentRequest {
    let prompt = format!(
        "Analiza la siguiente búsqueda de un usuario que busca propiedades inmobiliarias en México y extrae los filtros necesarios: \"{}\"",
        query
    );

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(prompt) }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

/// Declared shape of the model's JSON answer
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "operation": { "type": "STRING", "description": "Venta o Renta" },
            "propertyType": { "type": "STRING", "description": "Casa, Departamento, Terreno, Estudio o Penthouse" },
            "zone": { "type": "STRING", "description": "Ubicación aproximada" },
            "maxPrice": { "type": "NUMBER", "description": "Presupuesto máximo en pesos" },
            "explanation": { "type": "STRING", "description": "Breve explicación de lo que entendiste" }
        },
        "required": ["explanation"]
    })
}

/// Validate the model's JSON text against the declared schema
pub fn parse_intent(text: &str) -> Result<ExtractedIntent, ExtractionError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(ExtractionError::Schema("expected a JSON object".to_string()));
    }

    let raw: RawIntent =
        serde_json::from_value(value).map_err(|e| ExtractionError::Schema(e.to_string()))?;

    let max_price = match raw.max_price {
        Some(price) if !price.is_finite() || price < 0.0 => {
            return Err(ExtractionError::Schema(format!(
                "maxPrice must be a non-negative number, got {}",
                price
            )));
        }
        Some(price) => Some(price.round() as u64),
        None => None,
    };

    Ok(ExtractedIntent {
        operation: present(raw.operation),
        property_type: present(raw.property_type),
        zone: present(raw.zone),
        max_price,
        explanation: Some(raw.explanation.trim().to_string()),
    })
}

fn present(value: Option<String>) -> Option<String> {
    let value = value?.trim().to_string();
    if value.is_empty() || UNCONSTRAINED_WORDS.contains(&value.to_lowercase().as_str()) {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIntent {
    #[serde(default, alias = "operacion")]
    operation: Option<String>,
    #[serde(default, alias = "tipo")]
    property_type: Option<String>,
    #[serde(default, alias = "zona")]
    zone: Option<String>,
    #[serde(default, alias = "precioMax")]
    max_price: Option<f64>,
    explanation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
