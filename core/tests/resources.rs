//! Every resource operation against a recording transport.
//!
//! Each test queues a canned response, performs one SDK call, and checks the
//! request the SDK handed to the transport (verb, URL, body, headers) along
//! with the decoded result.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use unsent::types::*;
use unsent::{
    ClientConfig, Error, HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport,
    TransportError, Unsent,
};

const BASE: &str = "https://api.test/v1";

#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
}

impl Transport for Recorder {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| "no response queued".into())
    }
}

impl Recorder {
    fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

/// Client whose next response is `status` with `body`.
fn fixture(status: u16, body: Value) -> (Unsent, Recorder) {
    let recorder = Recorder::default();
    recorder.responses.lock().unwrap().push_back(HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    });
    let config = ClientConfig::builder()
        .api_key("un_test")
        .base_url("https://api.test")
        .build()
        .unwrap();
    (Unsent::with_transport(config, recorder.clone()), recorder)
}

fn ok(body: Value) -> (Unsent, Recorder) {
    fixture(200, body)
}

fn body_of(req: &HttpRequest) -> Value {
    serde_json::from_str(req.body.as_deref().expect("request has a body")).unwrap()
}

fn assert_request(req: &HttpRequest, method: HttpMethod, path: &str) {
    assert_eq!(req.method, method, "method for {path}");
    assert_eq!(req.url, format!("{BASE}{path}"));
}

fn jan_first() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

// --- emails ---

#[test]
fn emails_send() {
    let (client, rec) = ok(json!({"emailId": "em_1"}));
    let email = SendEmail::new("me@test.com", "you@test.com")
        .subject("Hello")
        .html("<p>Hi</p>");
    let sent = client.emails().send(&email).unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/emails");
    assert_eq!(
        body_of(&req),
        json!({
            "to": "you@test.com",
            "from": "me@test.com",
            "subject": "Hello",
            "html": "<p>Hi</p>"
        })
    );
    assert_eq!(req.header("Authorization"), Some("Bearer un_test"));
    assert_eq!(req.header("Idempotency-Key"), None);
    assert_eq!(sent.email_id, "em_1");
}

#[test]
fn emails_create_with_idempotency_key() {
    let (client, rec) = ok(json!({"emailId": "em_2"}));
    let email = SendEmail::new("me@test.com", vec!["a@test.com", "b@test.com"]).text("x");
    let options = RequestOptions::new().idempotency_key("order-7");
    client
        .emails()
        .create_with_options(&email, &options)
        .unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/emails");
    assert_eq!(req.header("idempotency-key"), Some("order-7"));
    assert_eq!(body_of(&req)["to"], json!(["a@test.com", "b@test.com"]));
}

#[test]
fn emails_batch() {
    let (client, rec) = ok(json!({"data": [{"emailId": "em_1"}, {"emailId": "em_2"}]}));
    let emails = [
        SendEmail::new("me@test.com", "a@test.com").text("1"),
        SendEmail::new("me@test.com", "b@test.com").text("2"),
    ];
    let sent = client
        .emails()
        .batch_with_options(&emails, &RequestOptions::new().idempotency_key("batch-1"))
        .unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/emails/batch");
    assert_eq!(body_of(&req).as_array().unwrap().len(), 2);
    assert_eq!(req.header("Idempotency-Key"), Some("batch-1"));
    assert_eq!(sent.data[1].email_id, "em_2");
}

#[test]
fn emails_get() {
    let (client, rec) = ok(json!({
        "id": "em_1",
        "to": ["a@test.com"],
        "status": "SENT",
        "latestStatus": "DELIVERED",
        "domainId": 7
    }));
    let email = client.emails().get("em_1").unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Get, "/emails/em_1");
    assert!(req.body.is_none());
    assert_eq!(email.current_status(), Some("DELIVERED"));
    assert_eq!(email.domain_id.as_deref(), Some("7"));
    assert_eq!(email.to.unwrap().to_vec(), vec!["a@test.com".to_string()]);
}

#[test]
fn emails_update() {
    let (client, rec) = ok(json!({"emailId": "em_1"}));
    let update = UpdateEmail {
        scheduled_at: Some(jan_first()),
        ..UpdateEmail::default()
    };
    client.emails().update("em_1", &update).unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Patch, "/emails/em_1");
    assert_eq!(
        body_of(&req),
        json!({"scheduledAt": "2024-01-01T00:00:00Z"})
    );
}

#[test]
fn emails_cancel_sends_empty_object() {
    let (client, rec) = ok(json!({"emailId": "em_1"}));
    let cancelled = client.emails().cancel("em_1").unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/emails/em_1/cancel");
    assert_eq!(body_of(&req), json!({}));
    assert_eq!(cancelled.email_id, "em_1");
}

#[test]
fn emails_list_with_filters() {
    let (client, rec) = ok(json!({"data": [{"id": "em_1"}], "count": 12}));
    let params = ListEmailsParams {
        page: Some(2),
        limit: Some(5),
        start_date: Some(jan_first()),
        end_date: None,
        domain_id: Some("7".to_string()),
    };
    let list = client.emails().list(&params).unwrap();

    let req = rec.last();
    assert_request(
        &req,
        HttpMethod::Get,
        "/emails?page=2&limit=5&startDate=2024-01-01T00%3A00%3A00Z&domainId=7",
    );
    assert_eq!(list.count, Some(12));
    assert_eq!(list.data[0].id, "em_1");
}

#[test]
fn emails_list_without_filters_has_no_query() {
    let (client, rec) = ok(json!([]));
    let list = client.emails().list(&ListEmailsParams::default()).unwrap();

    assert_request(&rec.last(), HttpMethod::Get, "/emails");
    assert!(list.is_empty());
    assert_eq!(list.count, None);
}

#[test]
fn emails_bounces_complaints_unsubscribes() {
    for (path, call) in [
        ("bounces", 0),
        ("complaints", 1),
        ("unsubscribes", 2),
    ] {
        let (client, rec) = ok(json!({"data": [{"id": "em_9"}], "count": 1}));
        let params = PageParams::new(1, 20);
        let list = match call {
            0 => client.emails().bounces(&params),
            1 => client.emails().complaints(&params),
            _ => client.emails().unsubscribes(&params),
        }
        .unwrap();

        assert_request(
            &rec.last(),
            HttpMethod::Get,
            &format!("/emails/{path}?page=1&limit=20"),
        );
        assert_eq!(list.len(), 1);
    }
}

#[test]
fn emails_events() {
    let (client, rec) = ok(json!({"data": [{"status": "OPENED", "ip": "1.2.3.4"}]}));
    let params = EventsParams {
        status: Some(EmailStatus::Opened),
        limit: Some(10),
        ..EventsParams::default()
    };
    let events = client.emails().events("em_1", &params).unwrap();

    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/emails/em_1/events?limit=10&status=OPENED",
    );
    assert_eq!(events.data[0].status.as_deref(), Some("OPENED"));
    assert_eq!(events.data[0].fields["ip"], "1.2.3.4");
}

// --- contacts ---

#[test]
fn contacts_list_joins_filters() {
    let (client, rec) = ok(json!([{"id": "c1", "email": "a@test.com"}]));
    let params = ListContactsParams {
        emails: vec!["a@test.com".to_string(), "b@test.com".to_string()],
        ids: vec!["c1".to_string(), "c2".to_string()],
        page: Some(1),
        limit: None,
    };
    let contacts = client.contacts().list("book1", &params).unwrap();

    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/contactBooks/book1/contacts?emails=a%40test.com%2Cb%40test.com&page=1&ids=c1%2Cc2",
    );
    assert_eq!(contacts[0].id, "c1");
}

#[test]
fn contacts_create() {
    let (client, rec) = ok(json!({"contactId": "c1"}));
    let contact = CreateContact {
        first_name: Some("Ann".to_string()),
        ..CreateContact::new("ann@test.com")
    };
    let created = client.contacts().create("book1", &contact).unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/contactBooks/book1/contacts");
    assert_eq!(
        body_of(&req),
        json!({"email": "ann@test.com", "firstName": "Ann"})
    );
    assert_eq!(created.id, "c1");
}

#[test]
fn contacts_get() {
    let (client, rec) = ok(json!({"id": "c1", "metadata": {"plan": "pro"}}));
    let contact = client.contacts().get("book1", "c1").unwrap();

    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/contactBooks/book1/contacts/c1",
    );
    assert_eq!(contact.custom_fields().unwrap()["plan"], "pro");
}

#[test]
fn contacts_update() {
    let (client, rec) = ok(json!({"id": "c1"}));
    let update = UpdateContact {
        subscribed: Some(false),
        ..UpdateContact::default()
    };
    client.contacts().update("book1", "c1", &update).unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Patch, "/contactBooks/book1/contacts/c1");
    assert_eq!(body_of(&req), json!({"subscribed": false}));
}

#[test]
fn contacts_upsert() {
    let (client, rec) = ok(json!({"id": "c1", "email": "ann@test.com"}));
    let upserted = client
        .contacts()
        .upsert("book1", "c1", &UpsertContact::new("ann@test.com"))
        .unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Put, "/contactBooks/book1/contacts/c1");
    assert_eq!(body_of(&req), json!({"email": "ann@test.com"}));
    assert_eq!(upserted.email.as_deref(), Some("ann@test.com"));
}

#[test]
fn contacts_delete() {
    let (client, rec) = ok(json!({"success": true}));
    let deleted = client.contacts().delete("book1", "c1").unwrap();

    let req = rec.last();
    assert_request(&req, HttpMethod::Delete, "/contactBooks/book1/contacts/c1");
    assert!(req.body.is_none());
    assert!(deleted.is_deleted());
}

// --- contact books ---

#[test]
fn contact_books_crud() {
    let (client, rec) = ok(json!([{"id": "cb1", "name": "News"}]));
    let books = client.contact_books().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/contact-books");
    assert_eq!(books[0].name.as_deref(), Some("News"));

    let (client, rec) = ok(json!({"id": "cb1", "details": {"totalContacts": 3}}));
    let book = client.contact_books().get("cb1").unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/contact-books/cb1");
    assert_eq!(book.details.unwrap().total_contacts, Some(3));

    let (client, rec) = ok(json!({"id": "cb1", "name": "News"}));
    client
        .contact_books()
        .create(&CreateContactBook::new("News"))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/contact-books");
    assert_eq!(body_of(&req), json!({"name": "News"}));

    let (client, rec) = ok(json!({"id": "cb1"}));
    let update = UpdateContactBook {
        emoji: Some("📬".to_string()),
        ..UpdateContactBook::default()
    };
    client.contact_books().update("cb1", &update).unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Patch, "/contact-books/cb1");
    assert_eq!(body_of(&req), json!({"emoji": "📬"}));

    let (client, rec) = ok(json!({"id": "cb1", "success": true}));
    client.contact_books().delete("cb1").unwrap();
    assert_request(&rec.last(), HttpMethod::Delete, "/contact-books/cb1");
}

// --- campaigns ---

#[test]
fn campaigns_crud_and_actions() {
    let (client, rec) = ok(json!([{"id": "camp1", "sent": 10}]));
    let campaigns = client.campaigns().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/campaigns");
    assert_eq!(campaigns[0].sent, Some(10));

    let (client, rec) = ok(json!({"id": "camp1", "status": "DRAFT"}));
    let payload = CreateCampaign::new("Launch", "me@test.com", "Big news", "book1");
    client.campaigns().create(&payload).unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/campaigns");
    assert_eq!(body_of(&req)["contactBookId"], "book1");

    let (client, rec) = ok(json!({"id": "camp1"}));
    client.campaigns().get("camp1").unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/campaigns/camp1");

    let (client, rec) = ok(json!({"id": "camp1", "status": "SCHEDULED"}));
    let action = client
        .campaigns()
        .schedule("camp1", &ScheduleCampaign::at(jan_first()))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/campaigns/camp1/schedule");
    assert_eq!(
        body_of(&req),
        json!({"scheduledAt": "2024-01-01T00:00:00Z"})
    );
    assert_eq!(action.status.as_deref(), Some("SCHEDULED"));

    let (client, rec) = ok(json!({"id": "camp1", "status": "PAUSED"}));
    client.campaigns().pause("camp1").unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/campaigns/camp1/pause");
    assert_eq!(body_of(&req), json!({}));

    let (client, rec) = ok(json!({"id": "camp1", "status": "RUNNING"}));
    client.campaigns().resume("camp1").unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/campaigns/camp1/resume");
    assert_eq!(body_of(&req), json!({}));
}

// --- domains ---

#[test]
fn domains_crud() {
    let (client, rec) = ok(json!([{"id": 1, "name": "example.com"}, {"id": "2"}]));
    let domains = client.domains().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/domains");
    assert_eq!(domains[0].id, "1");
    assert_eq!(domains[0].hostname(), Some("example.com"));
    assert_eq!(domains[1].id, "2");

    let (client, rec) = ok(json!({"id": 1}));
    client.domains().get("1").unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/domains/1");

    let (client, rec) = ok(json!({"id": 3, "domain": "mail.test.dev", "status": "PENDING"}));
    client
        .domains()
        .create(&CreateDomain::new("mail.test.dev", "eu-west-1"))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/domains");
    assert_eq!(
        body_of(&req),
        json!({"name": "mail.test.dev", "region": "eu-west-1"})
    );

    let (client, rec) = ok(json!({"message": "started"}));
    let verification = client.domains().verify("3").unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Put, "/domains/3/verify");
    assert!(req.body.is_none());
    assert_eq!(verification.message.as_deref(), Some("started"));

    let (client, rec) = ok(json!({"id": 3, "deleted": true}));
    let deleted = client.domains().delete("3").unwrap();
    assert_request(&rec.last(), HttpMethod::Delete, "/domains/3");
    assert_eq!(deleted.id.as_deref(), Some("3"));
}

// --- templates ---

#[test]
fn templates_crud() {
    let (client, rec) = ok(json!([{"id": "t1"}]));
    client.templates().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/templates");

    let (client, rec) = ok(json!({"id": "t1", "name": "Welcome"}));
    client.templates().get("t1").unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/templates/t1");

    let (client, rec) = ok(json!({"id": "t1"}));
    client
        .templates()
        .create(&CreateTemplate::new("Welcome", "Hi {{name}}"))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/templates");
    assert_eq!(body_of(&req)["subject"], "Hi {{name}}");

    let (client, rec) = ok(json!({"id": "t1"}));
    let update = UpdateTemplate {
        name: Some("Hello".to_string()),
        ..UpdateTemplate::default()
    };
    client.templates().update("t1", &update).unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Patch, "/templates/t1");
    assert_eq!(body_of(&req), json!({"name": "Hello"}));

    let (client, rec) = ok(json!({"success": true}));
    client.templates().delete("t1").unwrap();
    assert_request(&rec.last(), HttpMethod::Delete, "/templates/t1");
}

// --- webhooks ---

#[test]
fn webhooks_crud() {
    let (client, rec) = ok(json!([{"id": "wh1", "events": ["email.sent"]}]));
    let hooks = client.webhooks().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/webhooks");
    assert_eq!(
        hooks[0].events.as_deref(),
        Some(&["email.sent".to_string()][..])
    );

    let (client, rec) = ok(json!({"id": "wh1"}));
    client
        .webhooks()
        .create(&CreateWebhook::new("https://hooks.test/in", ["email.sent", "email.bounced"]))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/webhooks");
    assert_eq!(
        body_of(&req),
        json!({"url": "https://hooks.test/in", "events": ["email.sent", "email.bounced"]})
    );

    let (client, rec) = ok(json!({"success": true}));
    let update = UpdateWebhook {
        url: Some("https://hooks.test/v2".to_string()),
        ..UpdateWebhook::default()
    };
    let updated = client.webhooks().update("wh1", &update).unwrap();
    assert_request(&rec.last(), HttpMethod::Patch, "/webhooks/wh1");
    assert_eq!(updated.success, Some(true));

    let (client, rec) = ok(json!({"success": true}));
    client.webhooks().delete("wh1").unwrap();
    assert_request(&rec.last(), HttpMethod::Delete, "/webhooks/wh1");
}

// --- suppressions ---

#[test]
fn suppressions_list_add_delete() {
    let (client, rec) = ok(json!({
        "data": [{"email": "x@test.com", "reason": "MANUAL"}],
        "count": 1
    }));
    let params = ListSuppressionsParams {
        search: Some("x@".to_string()),
        reason: Some(SuppressionReason::Manual),
        ..ListSuppressionsParams::default()
    };
    let list = client.suppressions().list(&params).unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/suppressions?search=x%40&reason=MANUAL",
    );
    assert_eq!(list.data[0].email, "x@test.com");

    let (client, rec) = ok(json!({"email": "x@test.com", "reason": "HARD_BOUNCE"}));
    client
        .suppressions()
        .add(&AddSuppression::new("x@test.com", SuppressionReason::HardBounce))
        .unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/suppressions");
    assert_eq!(
        body_of(&req),
        json!({"email": "x@test.com", "reason": "HARD_BOUNCE"})
    );

    let (client, rec) = ok(json!({"deleted": true}));
    client.suppressions().delete("x@test.com").unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Delete,
        "/suppressions/email/x@test.com",
    );
}

// --- analytics ---

#[test]
fn analytics_endpoints() {
    let (client, rec) = ok(json!({"total": 10, "delivered": 9}));
    let analytics = client.analytics().get().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/analytics");
    assert_eq!(analytics.counts.delivered, Some(9));

    let (client, rec) = ok(json!({"data": [{"date": "2024-01-01", "sent": 4}]}));
    let params = TimeSeriesParams {
        days: Some(7),
        domain: Some("example.com".to_string()),
    };
    let series = client.analytics().time_series(&params).unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/analytics/time-series?days=7&domain=example.com",
    );
    assert_eq!(series.data[0].counts.sent, Some(4));

    let (client, rec) = ok(json!({
        "domain": "example.com",
        "reputation": 98.5,
        "bounceRate": 0.01
    }));
    let reputation = client
        .analytics()
        .reputation(&ReputationParams {
            domain: Some("example.com".to_string()),
        })
        .unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/analytics/reputation?domain=example.com",
    );
    assert_eq!(reputation.reputation, Some(98.5));
    assert_eq!(reputation.details["bounceRate"], 0.01);
}

// --- api keys ---

#[test]
fn api_keys_crud() {
    let (client, rec) = ok(json!([{"id": "k1", "partialToken": "un_abc..."}]));
    let keys = client.api_keys().list().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/api-keys");
    assert_eq!(keys[0].partial_token.as_deref(), Some("un_abc..."));

    let (client, rec) = ok(json!({"id": "k2", "token": "un_full"}));
    let key = CreateApiKey {
        permission: Some(ApiKeyPermission::Sending),
        ..CreateApiKey::new("ci")
    };
    let created = client.api_keys().create(&key).unwrap();
    let req = rec.last();
    assert_request(&req, HttpMethod::Post, "/api-keys");
    assert_eq!(
        body_of(&req),
        json!({"name": "ci", "permission": "SENDING"})
    );
    assert_eq!(created.token, "un_full");

    let (client, rec) = ok(json!({"success": true}));
    client.api_keys().delete("k2").unwrap();
    assert_request(&rec.last(), HttpMethod::Delete, "/api-keys/k2");
}

// --- account and reports ---

#[test]
fn settings_get() {
    let (client, rec) = ok(json!({"name": "Acme", "plan": "pro"}));
    let settings = client.settings().get().unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/settings");
    assert_eq!(settings.display_name(), Some("Acme"));
}

#[test]
fn system_health_and_version() {
    let (client, rec) = ok(json!({"status": "ok", "uptime": 12.5}));
    assert_eq!(client.system().health().unwrap().uptime, Some(12.5));
    assert_request(&rec.last(), HttpMethod::Get, "/health");

    let (client, rec) = ok(json!({"version": "1.4.0"}));
    assert_eq!(client.system().version().unwrap().version, "1.4.0");
    assert_request(&rec.last(), HttpMethod::Get, "/version");
}

#[test]
fn events_list() {
    let (client, rec) = ok(json!({"events": [{"emailId": "em_1", "status": "SENT"}], "count": 1}));
    let params = EventsParams {
        page: Some(1),
        start_date: Some(jan_first()),
        ..EventsParams::default()
    };
    let events = client.events().list(&params).unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/events?page=1&startDate=2024-01-01T00%3A00%3A00Z",
    );
    assert_eq!(events.data[0].email_id.as_deref(), Some("em_1"));
    assert_eq!(events.count, Some(1));
}

#[test]
fn metrics_get() {
    let (client, rec) = ok(json!({"period": "week", "metrics": {"deliveryRate": 0.97}}));
    let metrics = client
        .metrics()
        .get(&MetricsParams {
            period: Some(MetricsPeriod::Week),
        })
        .unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/metrics?period=week");
    assert_eq!(metrics.value("deliveryRate"), Some(0.97));
}

#[test]
fn stats_get() {
    let (client, rec) = ok(json!({"stats": {"sent": 3}}));
    let params = StatsParams {
        start_date: Some(jan_first()),
        end_date: Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()),
    };
    let stats = client.stats().get(&params).unwrap();
    assert_request(
        &rec.last(),
        HttpMethod::Get,
        "/stats?startDate=2024-01-01T00%3A00%3A00Z&endDate=2024-01-31T00%3A00%3A00Z",
    );
    assert_eq!(stats.count("sent"), Some(3));
}

#[test]
fn activity_get() {
    let (client, rec) = ok(json!({"activity": [{"id": "a1"}, {"id": "a2"}], "total": 2}));
    let feed = client.activity().get(&PageParams::new(1, 2)).unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/activity?page=1&limit=2");
    assert_eq!(feed.len(), 2);
    assert_eq!(feed.count, Some(2));
}

#[test]
fn teams_get_and_list() {
    let (client, rec) = ok(json!({"id": "team1", "name": "Acme"}));
    assert_eq!(client.teams().get().unwrap().id, "team1");
    assert_request(&rec.last(), HttpMethod::Get, "/team");

    let (client, rec) = ok(json!([{"id": "team1"}, {"id": "team2"}]));
    assert_eq!(client.teams().list().unwrap().len(), 2);
    assert_request(&rec.last(), HttpMethod::Get, "/teams");
}

// --- dispatch behavior ---

#[test]
fn ids_are_percent_encoded_as_one_segment() {
    let (client, rec) = ok(json!({"id": "a/b"}));
    client.templates().get("a/b").unwrap();
    assert_request(&rec.last(), HttpMethod::Get, "/templates/a%2Fb");
}

#[test]
fn api_errors_are_normalized() {
    let (client, _) = fixture(
        404,
        json!({"code": "NOT_FOUND", "message": "no such email"}),
    );
    let err = client.emails().get("missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.api_error().unwrap().message, "no such email");

    let (client, _) = fixture(
        422,
        json!({"error": {"code": "VALIDATION_ERROR", "message": "bad to"}}),
    );
    let err = client
        .emails()
        .send(&SendEmail::new("me@test.com", "nope"))
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.api_error().unwrap().code, "VALIDATION_ERROR");
}

#[test]
fn mismatched_success_body_is_deserialization_error() {
    let (client, _) = ok(json!({"unexpected": true}));
    let err = client.emails().get("em_1").unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)));
}

#[test]
fn bad_list_item_reports_the_field_error() {
    let (client, _) = ok(json!({"data": [{"id": "em_1", "subject": 42}], "count": 1}));
    let err = client
        .emails()
        .list(&ListEmailsParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::Deserialization(_)));
    let message = err.to_string();
    assert!(message.contains("list item"), "{message}");
    assert!(message.contains("expected a string"), "{message}");
}

#[test]
fn transport_failure_is_surfaced() {
    let config = ClientConfig::builder()
        .api_key("un_test")
        .base_url("https://api.test")
        .build()
        .unwrap();
    let client = Unsent::with_transport(config, Recorder::default());
    let err = client.system().health().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.to_string().contains("no response queued"));
}

#[test]
fn clones_share_the_transport() {
    let (client, rec) = ok(json!({"status": "ok"}));
    rec.responses.lock().unwrap().push_back(HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: r#"{"status":"ok"}"#.to_string(),
    });
    let other = client.clone();
    client.system().health().unwrap();
    other.system().health().unwrap();
    assert_eq!(rec.requests.lock().unwrap().len(), 2);
}
