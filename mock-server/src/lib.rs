//! In-memory emulation of a subset of the Unsent API.
//!
//! # Design
//! All routes live under `/v1`. Everything except `/health` and `/version`
//! requires `Authorization: Bearer <key>`. State is a single `RwLock`-guarded
//! `Db` shared by every handler. Errors use both shapes the real service
//! emits: validation and auth failures are nested under `"error"`, missing
//! resources are flat `{code, message}` objects.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

/// Key accepted when none is configured.
pub const DEFAULT_API_KEY: &str = "un_test_key";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub region: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBook {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed: bool,
    pub properties: Map<String, Value>,
    pub contact_book_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored email. The status is published as `latestStatus`, matching the
/// real service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub to: Vec<String>,
    pub from: String,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "latestStatus")]
    pub status: String,
    /// Numeric id of the sending domain, when the sender's host is registered.
    pub domain_id: Option<u64>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suppression {
    pub email: String,
    pub reason: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateDomain {
    pub name: String,
    pub region: String,
}

#[derive(Deserialize)]
pub struct CreateContactBook {
    pub name: String,
    pub emoji: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Deserialize)]
pub struct UpdateContactBook {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub properties: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed: Option<bool>,
    pub properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmail {
    pub to: Recipients,
    pub from: String,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct AddSuppression {
    pub email: String,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub reason: Option<String>,
    pub emails: Option<String>,
}

impl ListParams {
    /// Apply 1-based `page` and `limit` to an already filtered list.
    fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = self.limit.unwrap_or(50).max(1) as usize;
        let skip = (self.page.unwrap_or(1).max(1) as usize - 1) * limit;
        items.into_iter().skip(skip).take(limit).collect()
    }
}

#[derive(Debug, Default)]
pub struct Db {
    next_domain_id: u64,
    domains: BTreeMap<u64, Domain>,
    contact_books: HashMap<String, ContactBook>,
    contacts: HashMap<(String, String), Contact>,
    emails: HashMap<String, Email>,
    idempotency: HashMap<String, String>,
    suppressions: BTreeMap<String, Suppression>,
}

#[derive(Clone)]
pub struct AppState {
    db: Arc<RwLock<Db>>,
    api_key: Arc<str>,
    started: Instant,
}

/// Error responses in the two shapes the API uses.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"code": "UNAUTHORIZED", "message": "Invalid API key"}})),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": "BAD_REQUEST", "message": message}})),
            )
                .into_response(),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({"code": "NOT_FOUND", "message": format!("{what} not found")})),
            )
                .into_response(),
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

pub fn app() -> Router {
    app_with_key(DEFAULT_API_KEY)
}

pub fn app_with_key(api_key: impl Into<String>) -> Router {
    let api_key: String = api_key.into();
    let state = AppState {
        db: Arc::default(),
        api_key: Arc::from(api_key),
        started: Instant::now(),
    };

    let protected = Router::new()
        .route("/domains", get(list_domains).post(create_domain))
        .route("/domains/{id}", get(get_domain).delete(delete_domain))
        .route("/domains/{id}/verify", put(verify_domain))
        .route("/contact-books", get(list_books).post(create_book))
        .route(
            "/contact-books/{id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .route(
            "/contactBooks/{book}/contacts",
            get(list_contacts).post(create_contact),
        )
        .route(
            "/contactBooks/{book}/contacts/{id}",
            get(get_contact)
                .patch(update_contact)
                .put(upsert_contact)
                .delete(delete_contact),
        )
        .route("/emails", get(list_emails).post(send_email))
        .route("/emails/batch", post(send_batch))
        .route("/emails/{id}", get(get_email))
        .route("/emails/{id}/cancel", post(cancel_email))
        .route(
            "/suppressions",
            get(list_suppressions).post(add_suppression),
        )
        .route("/suppressions/email/{email}", delete(delete_suppression))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));

    let api = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .merge(protected);

    Router::new().nest("/v1", api).with_state(state)
}

pub async fn run(listener: TcpListener, api_key: impl Into<String>) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock Unsent API listening");
    }
    axum::serve(listener, app_with_key(api_key)).await
}

async fn require_bearer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let expected = format!("Bearer {}", state.api_key);
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        warn!(path = %request.uri().path(), "rejected request without a valid bearer token");
        return ApiError::Unauthorized.into_response();
    }
    next.run(request).await
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

// --- system ---

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"status": "ok", "uptime": state.started.elapsed().as_secs_f64()}))
}

async fn version() -> Json<Value> {
    Json(json!({"version": env!("CARGO_PKG_VERSION"), "platform": "mock"}))
}

// --- domains ---

async fn list_domains(State(state): State<AppState>) -> Json<Vec<Domain>> {
    Json(state.db.read().await.domains.values().cloned().collect())
}

async fn create_domain(
    State(state): State<AppState>,
    Json(input): Json<CreateDomain>,
) -> ApiResult<(StatusCode, Json<Domain>)> {
    if !input.name.contains('.') {
        return Err(ApiError::BadRequest(format!("invalid domain name {:?}", input.name)));
    }
    let mut db = state.db.write().await;
    if db.domains.values().any(|d| d.name == input.name) {
        return Err(ApiError::BadRequest(format!("domain {} already exists", input.name)));
    }
    db.next_domain_id += 1;
    let domain = Domain {
        id: db.next_domain_id,
        name: input.name,
        region: input.region,
        status: "PENDING".to_string(),
        created_at: now(),
    };
    db.domains.insert(domain.id, domain.clone());
    info!(id = domain.id, name = %domain.name, "domain created");
    Ok((StatusCode::CREATED, Json(domain)))
}

async fn get_domain(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Domain>> {
    let db = state.db.read().await;
    db.domains
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("domain"))
}

async fn verify_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    let domain = db.domains.get_mut(&id).ok_or(ApiError::NotFound("domain"))?;
    domain.status = "SUCCESS".to_string();
    Ok(Json(json!({
        "id": domain.id,
        "status": domain.status,
        "message": "Domain verification started",
        "updatedAt": now(),
    })))
}

async fn delete_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    db.domains.remove(&id).ok_or(ApiError::NotFound("domain"))?;
    Ok(Json(json!({"id": id, "deleted": true})))
}

// --- contact books ---

async fn list_books(State(state): State<AppState>) -> Json<Vec<ContactBook>> {
    let db = state.db.read().await;
    let mut books: Vec<_> = db.contact_books.values().cloned().collect();
    books.sort_by_key(|b| b.created_at);
    Json(books)
}

async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<CreateContactBook>,
) -> (StatusCode, Json<ContactBook>) {
    let at = now();
    let book = ContactBook {
        id: new_id("cb"),
        name: input.name,
        emoji: input.emoji,
        properties: input.properties,
        created_at: at,
        updated_at: at,
    };
    let mut db = state.db.write().await;
    db.contact_books.insert(book.id.clone(), book.clone());
    (StatusCode::CREATED, Json(book))
}

async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ContactBook>> {
    let db = state.db.read().await;
    db.contact_books
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("contact book"))
}

async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateContactBook>,
) -> ApiResult<Json<ContactBook>> {
    let mut db = state.db.write().await;
    let book = db
        .contact_books
        .get_mut(&id)
        .ok_or(ApiError::NotFound("contact book"))?;
    if let Some(name) = input.name {
        book.name = name;
    }
    if let Some(emoji) = input.emoji {
        book.emoji = Some(emoji);
    }
    if let Some(properties) = input.properties {
        book.properties = properties;
    }
    book.updated_at = now();
    Ok(Json(book.clone()))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    db.contact_books
        .remove(&id)
        .ok_or(ApiError::NotFound("contact book"))?;
    db.contacts.retain(|(book, _), _| book != &id);
    Ok(Json(json!({"id": id, "success": true})))
}

// --- contacts ---

async fn list_contacts(
    State(state): State<AppState>,
    Path(book): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Contact>>> {
    let db = state.db.read().await;
    if !db.contact_books.contains_key(&book) {
        return Err(ApiError::NotFound("contact book"));
    }
    let wanted: Option<Vec<&str>> = params.emails.as_deref().map(|e| e.split(',').collect());
    let mut contacts: Vec<_> = db
        .contacts
        .values()
        .filter(|c| c.contact_book_id == book)
        .filter(|c| match &wanted {
            Some(emails) => emails.contains(&c.email.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    contacts.sort_by_key(|c| c.created_at);
    Ok(Json(params.paginate(contacts)))
}

async fn create_contact(
    State(state): State<AppState>,
    Path(book): Path<String>,
    Json(input): Json<ContactInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let email = input
        .email
        .clone()
        .ok_or_else(|| ApiError::BadRequest("email is required".to_string()))?;
    let mut db = state.db.write().await;
    if !db.contact_books.contains_key(&book) {
        return Err(ApiError::NotFound("contact book"));
    }
    let contact = new_contact(new_id("ct"), book.clone(), email, input);
    let id = contact.id.clone();
    db.contacts.insert((book, id.clone()), contact);
    Ok((StatusCode::CREATED, Json(json!({"contactId": id}))))
}

fn new_contact(id: String, book: String, email: String, input: ContactInput) -> Contact {
    let at = now();
    Contact {
        id,
        email,
        first_name: input.first_name,
        last_name: input.last_name,
        subscribed: input.subscribed.unwrap_or(true),
        properties: input.properties.unwrap_or_default(),
        contact_book_id: book,
        created_at: at,
        updated_at: at,
    }
}

async fn get_contact(
    State(state): State<AppState>,
    Path((book, id)): Path<(String, String)>,
) -> ApiResult<Json<Contact>> {
    let db = state.db.read().await;
    db.contacts
        .get(&(book, id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("contact"))
}

async fn update_contact(
    State(state): State<AppState>,
    Path((book, id)): Path<(String, String)>,
    Json(input): Json<ContactInput>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    let contact = db
        .contacts
        .get_mut(&(book, id))
        .ok_or(ApiError::NotFound("contact"))?;
    if let Some(email) = input.email {
        contact.email = email;
    }
    if let Some(first_name) = input.first_name {
        contact.first_name = Some(first_name);
    }
    if let Some(last_name) = input.last_name {
        contact.last_name = Some(last_name);
    }
    if let Some(subscribed) = input.subscribed {
        contact.subscribed = subscribed;
    }
    if let Some(properties) = input.properties {
        contact.properties = properties;
    }
    contact.updated_at = now();
    Ok(Json(json!({"id": contact.id, "updatedAt": contact.updated_at})))
}

async fn upsert_contact(
    State(state): State<AppState>,
    Path((book, id)): Path<(String, String)>,
    Json(input): Json<ContactInput>,
) -> ApiResult<Json<Contact>> {
    let email = input
        .email
        .clone()
        .ok_or_else(|| ApiError::BadRequest("email is required".to_string()))?;
    let mut db = state.db.write().await;
    if !db.contact_books.contains_key(&book) {
        return Err(ApiError::NotFound("contact book"));
    }
    let key = (book.clone(), id.clone());
    let created_at = db.contacts.get(&key).map(|c| c.created_at);
    let mut contact = new_contact(id, book, email, input);
    if let Some(created_at) = created_at {
        contact.created_at = created_at;
    }
    db.contacts.insert(key, contact.clone());
    Ok(Json(contact))
}

async fn delete_contact(
    State(state): State<AppState>,
    Path((book, id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    db.contacts
        .remove(&(book, id.clone()))
        .ok_or(ApiError::NotFound("contact"))?;
    Ok(Json(json!({"id": id, "success": true})))
}

// --- emails ---

/// Validate one send request against the current state and build the record.
fn prepare_email(db: &Db, input: SendEmail) -> ApiResult<Email> {
    let to = match input.to {
        Recipients::One(one) => vec![one],
        Recipients::Many(many) => many,
    };
    if to.is_empty() {
        return Err(ApiError::BadRequest("at least one recipient is required".to_string()));
    }
    if let Some(blocked) = to.iter().find(|r| db.suppressions.contains_key(*r)) {
        return Err(ApiError::BadRequest(format!("{blocked} is suppressed")));
    }
    let host = input.from.rsplit_once('@').map(|(_, host)| host);
    let domain_id = db
        .domains
        .values()
        .find(|d| Some(d.name.as_str()) == host)
        .map(|d| d.id);
    let status = if input.scheduled_at.is_some() {
        "SCHEDULED"
    } else {
        "QUEUED"
    };
    Ok(Email {
        id: new_id("em"),
        to,
        from: input.from,
        subject: input.subject,
        html: input.html,
        text: input.text,
        status: status.to_string(),
        domain_id,
        scheduled_at: input.scheduled_at,
        created_at: now(),
    })
}

fn store_email(db: &mut Db, email: Email) -> String {
    let id = email.id.clone();
    db.emails.insert(id.clone(), email);
    id
}

async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<SendEmail>,
) -> ApiResult<Json<Value>> {
    let key = headers
        .get("idempotency-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let mut db = state.db.write().await;
    if let Some(existing) = key.as_ref().and_then(|k| db.idempotency.get(k)) {
        return Ok(Json(json!({"emailId": existing})));
    }
    let email = prepare_email(&db, input)?;
    let id = store_email(&mut db, email);
    if let Some(key) = key {
        db.idempotency.insert(key, id.clone());
    }
    info!(%id, "email accepted");
    Ok(Json(json!({"emailId": id})))
}

async fn send_batch(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<SendEmail>>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    let emails = inputs
        .into_iter()
        .map(|input| prepare_email(&db, input))
        .collect::<ApiResult<Vec<_>>>()?;
    let data: Vec<Value> = emails
        .into_iter()
        .map(|email| json!({"emailId": store_email(&mut db, email)}))
        .collect();
    Ok(Json(json!({"data": data})))
}

async fn list_emails(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let db = state.db.read().await;
    let mut emails: Vec<_> = db.emails.values().cloned().collect();
    emails.sort_by_key(|e| e.created_at);
    let count = emails.len();
    Json(json!({"data": params.paginate(emails), "count": count}))
}

async fn get_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Email>> {
    let db = state.db.read().await;
    db.emails
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("email"))
}

async fn cancel_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    let email = db.emails.get_mut(&id).ok_or(ApiError::NotFound("email"))?;
    if email.status != "SCHEDULED" {
        return Err(ApiError::BadRequest("only scheduled emails can be cancelled".to_string()));
    }
    email.status = "CANCELLED".to_string();
    Ok(Json(json!({"emailId": id})))
}

// --- suppressions ---

async fn list_suppressions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    let db = state.db.read().await;
    let search = params.search.as_deref();
    let matching: Vec<_> = db
        .suppressions
        .values()
        .filter(|s| search.map_or(true, |q| s.email.contains(q)))
        .filter(|s| params.reason.as_deref().map_or(true, |r| s.reason == r))
        .cloned()
        .collect();
    let count = matching.len();
    Json(json!({"data": params.paginate(matching), "count": count}))
}

async fn add_suppression(
    State(state): State<AppState>,
    Json(input): Json<AddSuppression>,
) -> ApiResult<(StatusCode, Json<Suppression>)> {
    if !input.email.contains('@') {
        return Err(ApiError::BadRequest(format!("invalid email {:?}", input.email)));
    }
    let suppression = Suppression {
        email: input.email,
        reason: input.reason.unwrap_or_else(|| "MANUAL".to_string()),
        source: "api".to_string(),
        created_at: now(),
    };
    state
        .db
        .write()
        .await
        .suppressions
        .insert(suppression.email.clone(), suppression.clone());
    Ok((StatusCode::CREATED, Json(suppression)))
}

async fn delete_suppression(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Value>> {
    let mut db = state.db.write().await;
    db.suppressions
        .remove(&email)
        .ok_or(ApiError::NotFound("suppression"))?;
    Ok(Json(json!({"email": email, "deleted": true})))
}
