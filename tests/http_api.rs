//! `HttpApi` against an in-process fake of the grading server.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Json, Router};
use exam_room::api::HttpApi;
use exam_room::config::ClientConfig;
use exam_room::error::CliError;
use exam_room::session::{Outcome, Session};
use exam_room::terminal::TerminalSurface;
use navigator::api::{ApiError, ExamApi};
use navigator::answer::Answer;
use navigator::nav::{CompletionMode, NavigatorConfig};
use navigator::paper::{AnswerInput, ExamPaper, PaperId, Question, QuestionId};
use navigator::wire::{AiRequest, AnswerSubmission, Endpoints};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<(String, Value)>>>,
    headers: Arc<Mutex<Vec<HeaderMap>>>,
    forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Recorded {
    fn bodies(&self, path: &str) -> Vec<Value> {
        self.bodies.lock().unwrap().iter().filter(|(p, _)| p == path).map(|(_, b)| b.clone()).collect()
    }
}

async fn submit(State(rec): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    rec.headers.lock().unwrap().push(headers);
    let answer = body["answer"].clone();
    rec.bodies.lock().unwrap().push(("submit".into(), body));
    if answer == json!("REJECT") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "status": "error", "message": "already submitted" })));
    }
    (StatusCode::OK, Json(json!({ "status": "success", "score": 1.0 })))
}

async fn complete(State(rec): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    rec.bodies.lock().unwrap().push(("complete".into(), body));
    Json(json!({ "status": "success", "message": "Well done" }))
}

async fn end_exam() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error</h1>")
}

async fn ask_ai(State(rec): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    rec.bodies.lock().unwrap().push(("ask".into(), body));
    Json(json!({ "response": "Think about 2", "remaining_limit": 3 }))
}

async fn exam_form(State(rec): State<Recorded>, Form(fields): Form<HashMap<String, String>>) -> &'static str {
    rec.forms.lock().unwrap().push(fields);
    "<html>thanks</html>"
}

async fn spawn_server() -> (String, Recorded) {
    let rec = Recorded::default();
    let app = Router::new()
        .route("/room/submit_single_answer/", post(submit))
        .route("/room/complete_exam/", post(complete))
        .route("/room/end_exam/", post(end_exam))
        .route("/room/ask_ai/", post(ask_ai))
        .route("/exam/{paper_id}/", post(exam_form))
        .with_state(rec.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), rec)
}

fn client(base_url: &str) -> HttpApi {
    let config = ClientConfig::new(base_url, Some("sess1".into()), Some("tok1".into()), 5, Endpoints::default()).unwrap();
    HttpApi::new(config).unwrap()
}

fn submission(answer: Option<Answer>) -> AnswerSubmission {
    AnswerSubmission { paper_id: PaperId::new("p1"), question_id: QuestionId::new("q1"), answer }
}

// =============================================================
// Transport
// =============================================================

#[tokio::test]
async fn submit_answer_sends_credentials_and_body() {
    let (base, rec) = spawn_server().await;
    let reply = client(&base).submit_answer(&submission(Some(Answer::Single("B".into())))).await.unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.score, Some(1.0));

    let headers = rec.headers.lock().unwrap()[0].clone();
    assert_eq!(headers.get("cookie").unwrap(), "sessionid=sess1; csrftoken=tok1");
    assert_eq!(headers.get("x-csrftoken").unwrap(), "tok1");
    assert_eq!(rec.bodies("submit"), vec![json!({ "paper_id": "p1", "question_id": "q1", "answer": "B" })]);
}

#[tokio::test]
async fn unanswered_question_is_sent_as_null() {
    let (base, rec) = spawn_server().await;
    client(&base).submit_answer(&submission(None)).await.unwrap();
    assert_eq!(rec.bodies("submit")[0]["answer"], Value::Null);
}

#[tokio::test]
async fn error_status_with_json_body_is_a_reply() {
    let (base, _rec) = spawn_server().await;
    let reply = client(&base).submit_answer(&submission(Some(Answer::Single("REJECT".into())))).await.unwrap();
    assert!(!reply.is_success());
    assert_eq!(reply.message.as_deref(), Some("already submitted"));
}

#[tokio::test]
async fn error_status_without_json_is_a_status_error() {
    let (base, _rec) = spawn_server().await;
    let err = client(&base).end_exam(&PaperId::new("p1")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = client(&format!("http://{addr}")).complete_exam(&PaperId::new("p1")).await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

#[tokio::test]
async fn ask_ai_reads_legacy_remaining_limit() {
    let (base, rec) = spawn_server().await;
    let request = AiRequest { question: "hint?".into(), paper_id: Some(PaperId::new("p1")) };
    let reply = client(&base).ask_ai(&request).await.unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.remaining, Some(3));
    assert_eq!(rec.bodies("ask"), vec![json!({ "question": "hint?", "paper_id": "p1" })]);
}

#[tokio::test]
async fn submit_form_posts_answer_sheet_fields() {
    let (base, rec) = spawn_server().await;
    client(&base).submit_form(&PaperId::new("p9"), r#"{"q1":"A"}"#).await.unwrap();
    let forms = rec.forms.lock().unwrap().clone();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0]["paper_id"], "p9");
    assert_eq!(forms[0]["answers"], r#"{"q1":"A"}"#);
}

#[tokio::test]
async fn submit_form_reports_rejection() {
    let (base, _rec) = spawn_server().await;
    let config = ClientConfig::new(
        &base,
        None,
        None,
        5,
        Endpoints { exam_form: "/missing/{paper_id}/".into(), ..Endpoints::default() },
    )
    .unwrap();
    let err = HttpApi::new(config).unwrap().submit_form(&PaperId::new("p9"), "{}").await.unwrap_err();
    assert!(matches!(err, CliError::FormRejected(404)));
}

// =============================================================
// Whole session over HTTP
// =============================================================

#[tokio::test]
async fn session_takes_paper_end_to_end() {
    let (base, rec) = spawn_server().await;
    let paper = ExamPaper::new(
        "p1",
        vec![
            Question::new("q1", "Colors?", AnswerInput::multiple_choice(["Red", "Green", "Blue"])),
            Question::new("q2", "Water is wet", AnswerInput::true_false()),
        ],
    );
    let surface = TerminalSurface::new(Cursor::new(b"a 3,1\nn\na t\nn\n".to_vec()), Vec::new()).assume_yes(true);
    let config = NavigatorConfig { completion: CompletionMode::CompleteRequest, ..NavigatorConfig::default() };
    let mut session = Session::new(client(&base), surface, paper, config, None);

    assert_eq!(session.run().await.unwrap(), Outcome::Completed);
    let answers: Vec<Value> = rec.bodies("submit").iter().map(|b| b["answer"].clone()).collect();
    assert_eq!(answers, vec![json!(["Red", "Blue"]), json!("True")]);
    assert_eq!(rec.bodies("complete"), vec![json!({ "paper_id": "p1" })]);
    assert!(session.surface().transcript().contains("! Well done"));
    assert!(session.surface().was_reloaded());
}
