// Agri-Assist (Kheti Mitra) farmer backend
// Router assembly, shared state, and the OpenAPI document

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod insurance;
pub mod loans;
pub mod market_prices;
pub mod middleware;
pub mod pest_detection;
pub mod response;
pub mod schemes;
pub mod store;
pub mod user;
pub mod validation;
pub mod weather;

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{FromRef, State},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi, ToSchema,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{AuthService, PasswordService, TokenService, UserRepository};
use crate::config::AppConfig;
use crate::loans::LoanRepository;
use crate::market_prices::MarketPriceRepository;
use crate::response::ApiResponse;
use crate::schemes::SchemeRepository;
use crate::store::{MemoryStore, StoreStats};
use crate::weather::{WeatherClient, WeatherClientConfig, WeatherRepository};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::profile_handler,
        weather::handlers::current_weather,
        weather::handlers::forecast,
        weather::handlers::alerts,
        weather::handlers::history,
        market_prices::handlers::list_prices,
        market_prices::handlers::submit_price,
        market_prices::handlers::my_submissions,
        loans::handlers::loan_types,
        loans::handlers::calculate_emi,
        loans::handlers::eligibility_check,
        loans::handlers::apply_for_loan,
        loans::handlers::my_loans,
        loans::handlers::my_loan,
        insurance::calculate_premium,
        schemes::handlers::list_schemes,
        schemes::handlers::get_scheme,
    ),
    components(schemas(
        HealthStatus,
        StoreStats,
        auth::RegisterRequest,
        auth::LoginRequest,
        auth::AuthResponse,
        auth::UserResponse,
        auth::Role,
        weather::WeatherReading,
        weather::models::Units,
        market_prices::MarketPrice,
        market_prices::models::SubmitPriceRequest,
        loans::emi_calculator::NumericInput,
        loans::emi_calculator::CalculateEmiRequest,
        loans::emi_calculator::EmiBreakdown,
        loans::eligibility::EligibilityResult,
        loans::LoanType,
        loans::LoanStatus,
        loans::LoanApplication,
        loans::models::ApplyLoanRequest,
        loans::models::LoanSubmission,
        loans::models::LoanTypeInfo,
        insurance::PremiumRequest,
        insurance::PremiumQuote,
        schemes::Scheme,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "system", description = "Service health"),
        (name = "auth", description = "Registration, login, and profile"),
        (name = "weather", description = "Weather provider proxy and stored readings"),
        (name = "market-prices", description = "Commodity price listings and submissions"),
        (name = "loans", description = "Loan catalog, calculators, and applications"),
        (name = "insurance", description = "Crop insurance premium estimates"),
        (name = "schemes", description = "Government scheme catalog")
    ),
    info(
        title = "Agri-Assist API",
        version = "1.0.0",
        description = "Farmer-facing API: weather, market prices, loans, insurance, and government schemes"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
///
/// Each field is extractable on its own through `State<T>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub weather_client: Arc<WeatherClient>,
    pub schemes: SchemeRepository,
    pub market_prices: MarketPriceRepository,
    pub weather_readings: WeatherRepository,
    pub loans: LoanRepository,
    #[from_ref(skip)]
    pub environment: String,
    #[from_ref(skip)]
    pub started_at: Instant,
}

impl AppState {
    /// Wire repositories and services around one shared store
    pub fn new(config: &AppConfig, store: Arc<MemoryStore>, passwords: PasswordService) -> Self {
        let token_service = Arc::new(TokenService::new(&config.jwt_secret));
        let auth_service = Arc::new(AuthService::new(
            UserRepository::new(store.clone()),
            passwords,
            token_service.clone(),
        ));
        let weather_client = Arc::new(WeatherClient::new(WeatherClientConfig::new(
            config.weather_api_url.clone(),
            config.weather_api_key.clone(),
        )));

        Self {
            auth_service,
            token_service,
            weather_client,
            schemes: SchemeRepository::new(store.clone()),
            market_prices: MarketPriceRepository::new(store.clone()),
            weather_readings: WeatherRepository::new(store.clone()),
            loans: LoanRepository::new(store.clone()),
            store,
            environment: config.environment.clone(),
            started_at: Instant::now(),
        }
    }
}

/// Liveness report for GET /health
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "OK")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Seconds since startup
    pub uptime: u64,
    #[schema(example = "development")]
    pub environment: String,
    pub database: StoreStats,
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "system"
)]
pub async fn health(State(state): State<AppState>) -> ApiResponse<HealthStatus> {
    ApiResponse::ok(HealthStatus {
        status: "OK",
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
        environment: state.environment.clone(),
        database: state.store.stats().await,
    })
}

/// Creates and configures the application router
/// Nests every feature area under /api and wraps it in the middleware stack
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .nest("/auth", auth::routes())
        .nest("/weather", weather::routes())
        .nest("/pest-detection", pest_detection::routes(&state))
        .nest("/market-prices", market_prices::routes(&state))
        .nest("/loans", loans::routes(&state))
        .nest("/insurance", insurance::routes(&state))
        .nest("/schemes", schemes::routes(&state))
        .nest("/user", user::routes(&state));

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(middleware::route_not_found);

    middleware::apply(router, config).with_state(state)
}
