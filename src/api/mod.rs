mod validate;

use axum::{
    Router,
    body::Bytes,
    extract::{Json, Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::contact::{self, ContactSubmission, EmailJsClient, EmailSender, SubmitStatus};
use crate::core::{
    Calculator, calculate_affordability, calculate_arm, calculate_biweekly, calculate_buydown,
    calculate_conventional, calculate_credit_card, calculate_dpa, calculate_extra_payments,
    calculate_fha, calculate_interest_only, calculate_mortgage, calculate_personal_loan,
    calculate_property_tax, calculate_refinance, calculate_rent_vs_buy,
    calculate_term_comparison, calculate_va, render_summary,
};
use crate::error::CalcError;
use crate::routes::{self, ROUTES};
use validate::Validate;

const UNCONFIGURED_CONTACT: &str = "The contact form is not available right now.";

#[derive(Clone, Default)]
pub struct AppState {
    email: Option<Arc<dyn EmailSender>>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        AppState {
            email: config.emailjs.clone().map(|emailjs| {
                Arc::new(EmailJsClient::new(emailjs)) as Arc<dyn EmailSender>
            }),
        }
    }

    pub fn with_sender(sender: Arc<dyn EmailSender>) -> Self {
        AppState {
            email: Some(sender),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct CalculatorSummary {
    slug: &'static str,
    title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'static str>,
}

#[derive(Serialize)]
struct SummaryLine {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct ContactResponse {
    status: SubmitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Runs `calculator` on a JSON object of inputs. Missing fields take the
/// calculator page defaults; `null` counts as an empty object.
pub fn evaluate(calculator: Calculator, payload: Value) -> Result<Value, CalcError> {
    match calculator {
        Calculator::Mortgage => run(payload, calculate_mortgage),
        Calculator::Refinance => run(payload, calculate_refinance),
        Calculator::ExtraPayments => run(payload, calculate_extra_payments),
        Calculator::InterestOnly => run(payload, calculate_interest_only),
        Calculator::Affordability => run(payload, calculate_affordability),
        Calculator::Arm => run(payload, calculate_arm),
        Calculator::RentVsBuy => run(payload, calculate_rent_vs_buy),
        Calculator::PersonalLoan => run(payload, calculate_personal_loan),
        Calculator::CreditCardRefinance => run(payload, calculate_credit_card),
        Calculator::TermComparison => run(payload, calculate_term_comparison),
        Calculator::Biweekly => run(payload, calculate_biweekly),
        Calculator::Buydown => run(payload, calculate_buydown),
        Calculator::PropertyTax => run(payload, calculate_property_tax),
        Calculator::Fha => run(payload, calculate_fha),
        Calculator::Va => run(payload, calculate_va),
        Calculator::Conventional => run(payload, calculate_conventional),
        Calculator::Dpa => run(payload, calculate_dpa),
    }
}

pub fn evaluate_slug(slug: &str, payload: Value) -> Result<Value, CalcError> {
    let calculator =
        Calculator::from_slug(slug).ok_or_else(|| CalcError::UnknownCalculator(slug.to_string()))?;
    evaluate(calculator, payload)
}

fn run<I, R, F>(payload: Value, calculate: F) -> Result<Value, CalcError>
where
    I: DeserializeOwned + Validate,
    R: Serialize,
    F: Fn(&I) -> R,
{
    let inputs = parse_inputs::<I>(payload)?;
    inputs.validate()?;
    Ok(serde_json::to_value(calculate(&inputs))?)
}

fn parse_inputs<I: DeserializeOwned>(payload: Value) -> Result<I, CalcError> {
    let payload = match payload {
        Value::Null => Value::Object(Map::new()),
        Value::Object(map) => Value::Object(map),
        _ => return Err(CalcError::invalid("payload must be a JSON object")),
    };
    serde_json::from_value(payload)
        .map_err(|e| CalcError::invalid(format!("Invalid API JSON payload: {e}")))
}

/// Input fields holding free text or enum tags. Their query values are kept
/// as strings even when they look like numbers or booleans.
const TEXT_FIELDS: [&str; 4] = ["county", "state", "plan", "frequency"];

/// Query strings carry everything as text; values that parse as JSON
/// (numbers, booleans, arrays) are taken as such, the rest stay strings.
fn query_to_payload(params: HashMap<String, String>) -> Value {
    let map = params
        .into_iter()
        .map(|(key, raw)| {
            let value = if TEXT_FIELDS.contains(&key.as_str()) {
                Value::String(raw)
            } else {
                serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw))
            };
            (key, value)
        })
        .collect::<Map<String, Value>>();
    Value::Object(map)
}

fn body_to_payload(body: &[u8]) -> Result<Value, CalcError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| CalcError::invalid(format!("Invalid API JSON payload: {e}")))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/routes", get(routes_handler))
        .route("/api/routes/*path", get(route_lookup_handler))
        .route("/api/calculators", get(calculators_handler))
        .route(
            "/api/calculators/:slug",
            get(calculator_get_handler).post(calculator_post_handler),
        )
        .route(
            "/api/calculators/:slug/summary",
            get(summary_get_handler).post(summary_post_handler),
        )
        .route("/api/contact", post(contact_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

pub async fn run_http_server(config: AppConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    if config.emailjs.is_none() {
        tracing::warn!("EmailJS credentials not set; /api/contact will answer 503");
    }
    let app = router(AppState::from_config(&config));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "loan calculator API listening");
    tracing::info!("local access: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn routes_handler() -> Response {
    json_response(StatusCode::OK, &ROUTES[..])
}

async fn route_lookup_handler(Path(path): Path<String>) -> Response {
    let path = format!("/{}", path.trim_start_matches('/'));
    match routes::lookup(&path) {
        Some(route) => json_response(StatusCode::OK, route),
        None => error_response(StatusCode::NOT_FOUND, &format!("No page at {path}")),
    }
}

async fn calculators_handler() -> Response {
    let calculators: Vec<CalculatorSummary> = Calculator::ALL
        .into_iter()
        .map(|calculator| CalculatorSummary {
            slug: calculator.slug(),
            title: calculator.title(),
            path: routes::calculator_route(calculator).map(|route| route.path),
        })
        .collect();
    json_response(StatusCode::OK, calculators)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn calculator_get_handler(
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    calculator_handler_impl(&slug, query_to_payload(params))
}

async fn calculator_post_handler(Path(slug): Path<String>, body: Bytes) -> Response {
    match body_to_payload(&body) {
        Ok(payload) => calculator_handler_impl(&slug, payload),
        Err(err) => calc_error_response(&err),
    }
}

async fn summary_get_handler(
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    summary_handler_impl(&slug, query_to_payload(params))
}

async fn summary_post_handler(Path(slug): Path<String>, body: Bytes) -> Response {
    match body_to_payload(&body) {
        Ok(payload) => summary_handler_impl(&slug, payload),
        Err(err) => calc_error_response(&err),
    }
}

fn summary_handler_impl(slug: &str, payload: Value) -> Response {
    match evaluate_slug(slug, payload) {
        Ok(result) => {
            let lines: Vec<SummaryLine> = render_summary(&result)
                .into_iter()
                .map(|(label, value)| SummaryLine { label, value })
                .collect();
            json_response(StatusCode::OK, lines)
        }
        Err(err) => calc_error_response(&err),
    }
}

fn calculator_handler_impl(slug: &str, payload: Value) -> Response {
    tracing::debug!(slug, "evaluating calculator");
    match evaluate_slug(slug, payload) {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(err) => {
            tracing::info!(slug, error = %err, "calculator request rejected");
            calc_error_response(&err)
        }
    }
}

async fn contact_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let submission = match serde_json::from_slice::<ContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid contact payload: {e}"),
            );
        }
    };
    if let Err(err) = submission.validate() {
        return calc_error_response(&err);
    }

    let Some(sender) = state.email.as_deref() else {
        return json_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ContactResponse {
                status: SubmitStatus::Error,
                message: Some(UNCONFIGURED_CONTACT),
            },
        );
    };

    match contact::submit(sender, &submission).await {
        SubmitStatus::Success => json_response(
            StatusCode::OK,
            ContactResponse {
                status: SubmitStatus::Success,
                message: None,
            },
        ),
        SubmitStatus::Error => json_response(
            StatusCode::BAD_GATEWAY,
            ContactResponse {
                status: SubmitStatus::Error,
                message: Some(contact::FAILURE_MESSAGE),
            },
        ),
    }
}

fn status_for(err: &CalcError) -> StatusCode {
    match err {
        CalcError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CalcError::UnknownCalculator(_) => StatusCode::NOT_FOUND,
        CalcError::Contact(_) => StatusCode::BAD_GATEWAY,
        CalcError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn calc_error_response(err: &CalcError) -> Response {
    error_response(status_for(err), &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    struct FixedSender {
        ok: bool,
    }

    #[async_trait]
    impl EmailSender for FixedSender {
        async fn send(&self, _submission: &ContactSubmission) -> Result<(), CalcError> {
            if self.ok {
                Ok(())
            } else {
                Err(CalcError::Contact("upstream rejected".to_string()))
            }
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, cache, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn post_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn contact_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Is the FHA calculator up to date?"
        })
    }

    #[test]
    fn evaluate_uses_page_defaults_for_empty_payload() {
        let result = evaluate(Calculator::Mortgage, Value::Null).expect("valid inputs");
        assert_approx(result["loanAmount"].as_f64().unwrap(), 240_000.0);
        assert_eq!(result["schedule"].as_array().unwrap().len(), 30);
    }

    #[test]
    fn evaluate_merges_partial_payload_over_defaults() {
        let result = evaluate(
            Calculator::Mortgage,
            json!({ "homePrice": 400000, "downPayment": 100000 }),
        )
        .expect("valid inputs");
        assert_approx(result["loanAmount"].as_f64().unwrap(), 300_000.0);
        assert_approx(result["downPaymentPercent"].as_f64().unwrap(), 25.0);
    }

    #[test]
    fn evaluate_reports_missing_break_even_as_null() {
        let result = evaluate(
            Calculator::Refinance,
            json!({ "newRate": 9.0, "newTermYears": 25 }),
        )
        .expect("valid inputs");
        assert!(result["breakEvenMonths"].is_null());
        assert!(result["monthlySavings"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn evaluate_rejects_bad_types_and_ranges() {
        let err = evaluate(Calculator::Arm, json!({ "initialRate": "high" }))
            .expect_err("must reject type");
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("Invalid API JSON payload"));

        let err = evaluate(Calculator::Biweekly, json!({ "termYears": 0 }))
            .expect_err("must reject zero term");
        assert!(err.to_string().contains("termYears"));

        let err = evaluate(Calculator::Va, json!([1, 2, 3])).expect_err("must reject array");
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn evaluate_slug_rejects_unknown_calculator() {
        let err = evaluate_slug("payday", Value::Null).expect_err("unknown slug");
        assert!(matches!(err, CalcError::UnknownCalculator(_)));
    }

    #[test]
    fn every_calculator_evaluates_with_defaults() {
        for calculator in Calculator::ALL {
            let result = evaluate(calculator, Value::Null)
                .unwrap_or_else(|e| panic!("{} failed: {e}", calculator.slug()));
            assert!(result.is_object(), "{} result", calculator.slug());
        }
    }

    #[test]
    fn query_values_parse_as_json_when_possible() {
        let params = HashMap::from([
            ("loanAmount".to_string(), "250000".to_string()),
            ("plan".to_string(), "3-2-1".to_string()),
            ("state".to_string(), "GA".to_string()),
            ("firstUse".to_string(), "false".to_string()),
        ]);
        let payload = query_to_payload(params);
        assert_eq!(payload["loanAmount"], json!(250000));
        assert_eq!(payload["plan"], json!("3-2-1"));
        assert_eq!(payload["state"], json!("GA"));
        assert_eq!(payload["firstUse"], json!(false));
    }

    #[test]
    fn text_fields_stay_strings_in_queries() {
        let params = HashMap::from([
            ("county".to_string(), "123".to_string()),
            ("propertyValue".to_string(), "200000".to_string()),
        ]);
        let payload = query_to_payload(params);
        assert_eq!(payload["county"], json!("123"));
        assert_eq!(payload["propertyValue"], json!(200000));

        let params = HashMap::from([("county".to_string(), "true".to_string())]);
        let result = evaluate(Calculator::PropertyTax, query_to_payload(params))
            .expect("numeric-looking county is still a county name");
        assert_approx(result["millRate"].as_f64().unwrap(), 12.5);
    }

    #[test]
    fn blank_post_body_means_defaults() {
        assert_eq!(body_to_payload(b"").unwrap(), Value::Null);
        assert_eq!(body_to_payload(b" \n").unwrap(), Value::Null);
        assert!(body_to_payload(b"{not json").is_err());
    }

    #[tokio::test]
    async fn health_reports_ok_with_no_store() {
        let (status, cache, body) = send(router(AppState::default()), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn routes_endpoint_lists_every_page() {
        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/routes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), ROUTES.len());
    }

    #[tokio::test]
    async fn calculator_get_reads_query_inputs() {
        let (status, _, body) = send(
            router(AppState::default()),
            get_request("/api/calculators/property-tax?propertyValue=250000&state=GA&county=fulton"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_approx(body["millRate"].as_f64().unwrap(), 10.2);
        assert_approx(body["assessedValue"].as_f64().unwrap(), 100_000.0);
        assert_approx(body["annualTax"].as_f64().unwrap(), 1_020.0);
    }

    #[tokio::test]
    async fn calculator_post_reads_json_inputs() {
        let (status, _, body) = send(
            router(AppState::default()),
            post_request(
                "/api/calculators/buydown",
                json!({ "loanAmount": 200000, "plan": "3-2-1" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["schedule"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn calculator_errors_map_to_status_codes() {
        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/calculators/payday")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("payday"));

        let (status, cache, body) = send(
            router(AppState::default()),
            post_request("/api/calculators/mortgage", json!({ "interestRate": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(cache.as_deref(), Some("no-store"));
        assert!(body["error"].as_str().unwrap().contains("interestRate"));
    }

    #[tokio::test]
    async fn route_lookup_resolves_page_paths() {
        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/routes/blog/va-loans")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "blogPost");
        assert_eq!(body["calculator"], "va");

        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/routes/15-vs-30")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "calculator");
        assert_eq!(body["title"], Calculator::TermComparison.title());

        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/routes/payday")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("/payday"));
    }

    #[tokio::test]
    async fn calculator_list_links_each_page() {
        let (status, _, body) =
            send(router(AppState::default()), get_request("/api/calculators")).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), Calculator::ALL.len());
        assert!(list.iter().any(|c| c["slug"] == "dpa" && c["path"] == "/dpa"));
    }

    #[tokio::test]
    async fn summary_renders_display_figures() {
        let (status, _, body) = send(
            router(AppState::default()),
            get_request("/api/calculators/mortgage/summary"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let lines = body.as_array().unwrap();
        let value_of = |label: &str| {
            lines
                .iter()
                .find(|line| line["label"] == label)
                .and_then(|line| line["value"].as_str())
                .map(str::to_string)
        };
        assert_eq!(value_of("principalAndInterest").as_deref(), Some("$1,678"));
        assert_eq!(value_of("downPaymentPercent").as_deref(), Some("20.00%"));

        let (status, _, _) = send(
            router(AppState::default()),
            post_request("/api/calculators/mortgage/summary", json!({ "termYears": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_json_not_found() {
        let (status, _, body) =
            send(router(AppState::default()), get_request("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn contact_without_email_service_is_unavailable() {
        let (status, _, body) = send(
            router(AppState::default()),
            post_request("/api/contact", contact_body()),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn contact_reports_success_and_failure() {
        let ok = AppState::with_sender(Arc::new(FixedSender { ok: true }));
        let (status, _, body) = send(router(ok), post_request("/api/contact", contact_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "success" }));

        let failing = AppState::with_sender(Arc::new(FixedSender { ok: false }));
        let (status, _, body) =
            send(router(failing), post_request("/api/contact", contact_body())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("try again later"));
    }

    #[tokio::test]
    async fn contact_rejects_invalid_submission() {
        let state = AppState::with_sender(Arc::new(FixedSender { ok: true }));
        let (status, _, body) = send(
            router(state),
            post_request("/api/contact", json!({ "name": "Jane", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("email"));
    }
}
