use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use rootform::{
    analyzer::SentenceAnalyzer, config::ServiceConfig, lexicon::WordNetLexicon,
    tagger::SpacyTagger, Token,
};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentenceAnalyzer>,
}

// API types
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub sentence: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("rootform=info,rootform_web_server=info,tower_http=debug")
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load the external engines once, before serving
    let config = ServiceConfig::from_env();
    info!(model = %config.spacy_model, wordnet = %config.wordnet_dir.display(), "Loading engines");
    let tagger = SpacyTagger::load(config.spacy_model.as_str())?;
    let lexicon = WordNetLexicon::load(&config.wordnet_dir)?;
    let analyzer = Arc::new(SentenceAnalyzer::new(Box::new(tagger), Box::new(lexicon)));

    // Create application state
    let app_state = AppState { analyzer };

    // Build our application with routes
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/api/health", get(health_check))
        .route("/api/analyze", post(analyze_sentence))
        // Add middleware
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse {
        success: true,
        data: Some("OK".to_string()),
        error: None,
    })
}

// Analyze a single sentence into its ordered token sequence.
// The response body is the bare token array; a malformed or missing
// `sentence` field is rejected by the JSON extractor before we get here.
async fn analyze_sentence(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Vec<Token>>, StatusCode> {
    match state.analyzer.analyze(&request.sentence) {
        Ok(tokens) => Ok(Json(tokens)),
        Err(e) => {
            warn!("Failed to analyze sentence: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
