//! End-to-end API tests against a real PostgreSQL database.
//!
//! They run only when TEST_DATABASE_URL (or DATABASE_URL) is set; without
//! one each test returns early so the suite still passes on machines with
//! no database. Tests share one database, so a lock serializes them and
//! every test starts from truncated tables.

use academia_api::{
    apply_migrations, common_routes, ensure_database_exists, entity_routes, AppState,
};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn test_app() -> Option<Router> {
    let url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()?;
    ensure_database_exists(&url).await.ok()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .ok()?;
    apply_migrations(&pool).await.ok()?;
    sqlx::query(
        "TRUNCATE schedules, evaluations, matriculations, courses, teachers, students \
         RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .ok()?;
    let state = AppState { pool };
    Some(
        Router::new()
            .merge(common_routes(state.clone()))
            .nest("/api", entity_routes(state)),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn student_payload(dni: &str) -> Value {
    json!({
        "name": "Ana",
        "surname": "Lopez",
        "dni": dni,
        "email": "ana.lopez@example.edu"
    })
}

fn teacher_payload(dni: &str) -> Value {
    json!({
        "name": "Luis",
        "surname": "Campos",
        "dni": dni,
        "email": "luis.campos@example.edu",
        "specialty": "Mathematics"
    })
}

async fn create_teacher(app: &Router) -> i64 {
    let (status, body) = send(app, "POST", "/api/teachers", Some(teacher_payload("T-100"))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["idTeacher"].as_i64().unwrap()
}

async fn create_student(app: &Router) -> i64 {
    let (status, body) = send(app, "POST", "/api/students", Some(student_payload("S-100"))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["idStudent"].as_i64().unwrap()
}

async fn create_course(app: &Router, teacher_id: i64) -> i64 {
    let payload = json!({
        "name": "Algebra",
        "code": "ALG1",
        "credits": 4,
        "semester": 1,
        "teacherId": teacher_id
    });
    let (status, body) = send(app, "POST", "/api/courses", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["idCourse"].as_i64().unwrap()
}

async fn create_matriculation(app: &Router, student_id: i64, course_id: i64) -> i64 {
    let payload = json!({
        "academicPeriod": "2024-I",
        "studentId": student_id,
        "courseId": course_id
    });
    let (status, body) = send(app, "POST", "/api/matriculations", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["idMatriculation"].as_i64().unwrap()
}

#[tokio::test]
async fn student_crud_round_trip() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(student_payload("11111111")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Student created successfully"));
    let id = body["data"]["idStudent"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], json!("ana.lopez@example.edu"));

    let mut updated = student_payload("11111111");
    updated["name"] = json!("Ana Maria");
    let (status, body) = send(&app, "PUT", &format!("/api/students/{id}"), Some(updated)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Student updated successfully"));
    assert_eq!(body["data"]["name"], json!("Ana Maria"));

    let (status, _) = send(&app, "DELETE", &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!(format!("Student not found with id {id}"))
    );
}

#[tokio::test]
async fn list_returns_envelope_with_array() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    create_student(&app).await;
    let (status, body) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Students retrieved successfully"));
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_ids_report_not_found() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let (status, body) = send(&app, "GET", "/api/teachers/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorType"], json!(404));
    assert_eq!(body["message"], json!("Teacher not found with id 9999"));

    let (status, _) = send(
        &app,
        "PUT",
        "/api/teachers/9999",
        Some(teacher_payload("T-9")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // A rejected update must not create a row either.
    let (_, body) = send(&app, "GET", "/api/teachers", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", "/api/teachers/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_failures_carry_the_full_list() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let payload = json!({ "email": "not-an-email" });
    let (status, body) = send(&app, "POST", "/api/students", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation failed"));
    let validations: Vec<String> = body["validations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(validations.contains(&"name: Name is required".to_string()));
    assert!(validations.contains(&"surname: Surname is required".to_string()));
    assert!(validations.contains(&"email: Email should be valid".to_string()));
}

#[tokio::test]
async fn blank_dni_is_a_business_error() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let (status, body) = send(&app, "POST", "/api/students", Some(student_payload("  "))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("DNI is required"));
    assert!(body.get("validations").is_none());
}

#[tokio::test]
async fn duplicate_dni_is_a_conflict() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let (status, _) = send(&app, "POST", "/api/students", Some(student_payload("22222222"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) =
        send(&app, "POST", "/api/students", Some(student_payload("22222222"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["errorType"], json!(409));
}

#[tokio::test]
async fn course_with_unknown_teacher_is_rejected_and_not_persisted() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let payload = json!({
        "name": "Algebra",
        "code": "ALG1",
        "credits": 4,
        "teacherId": 9999
    });
    let (status, body) = send(&app, "POST", "/api/courses", Some(payload)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Teacher not found with id 9999"));

    let (_, body) = send(&app, "GET", "/api/courses", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn matriculation_carries_denormalized_names() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let teacher_id = create_teacher(&app).await;
    let student_id = create_student(&app).await;
    let course_id = create_course(&app, teacher_id).await;

    let payload = json!({
        "academicPeriod": "2024-I",
        "studentId": student_id,
        "courseId": course_id
    });
    let (status, body) = send(&app, "POST", "/api/matriculations", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["studentName"], json!("Ana"));
    assert_eq!(body["data"]["courseName"], json!("Algebra"));
    assert_eq!(body["data"]["courseCode"], json!("ALG1"));

    let blank = json!({
        "academicPeriod": "  ",
        "studentId": student_id,
        "courseId": course_id
    });
    let (status, body) = send(&app, "POST", "/api/matriculations", Some(blank)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["validations"][0],
        json!("academicPeriod: Academic period is required")
    );
}

#[tokio::test]
async fn evaluation_grade_bounds() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let teacher_id = create_teacher(&app).await;
    let student_id = create_student(&app).await;
    let course_id = create_course(&app, teacher_id).await;
    let matriculation_id = create_matriculation(&app, student_id, course_id).await;

    let negative = json!({ "grade": -1.0, "matriculationId": matriculation_id });
    let (status, body) = send(&app, "POST", "/api/evaluations", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Grade cannot be negative"));

    let too_high = json!({ "grade": 20.5, "matriculationId": matriculation_id });
    let (status, body) = send(&app, "POST", "/api/evaluations", Some(too_high)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["validations"][0], json!("grade: Grade must not exceed 20"));

    let top = json!({ "grade": 20.0, "matriculationId": matriculation_id, "typeEvaluation": "final" });
    let (status, body) = send(&app, "POST", "/api/evaluations", Some(top)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["grade"], json!(20.0));
    assert_eq!(body["data"]["studentName"], json!("Ana"));
}

#[tokio::test]
async fn deleting_a_teacher_cascades_through_dependents() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let teacher_id = create_teacher(&app).await;
    let student_id = create_student(&app).await;
    let course_id = create_course(&app, teacher_id).await;
    let matriculation_id = create_matriculation(&app, student_id, course_id).await;

    let evaluation = json!({ "grade": 15.0, "matriculationId": matriculation_id });
    let (status, body) = send(&app, "POST", "/api/evaluations", Some(evaluation)).await;
    assert_eq!(status, StatusCode::CREATED);
    let evaluation_id = body["data"]["idEvaluation"].as_i64().unwrap();

    let schedule = json!({
        "dayOfWeek": "Monday",
        "startTime": "08:00:00",
        "endTime": "10:00:00",
        "classroom": "B-204",
        "courseId": course_id
    });
    let (status, body) = send(&app, "POST", "/api/schedules", Some(schedule)).await;
    assert_eq!(status, StatusCode::CREATED);
    let schedule_id = body["data"]["idSchedule"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/api/teachers/{teacher_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The whole chain below the teacher's courses goes with it.
    for uri in [
        format!("/api/courses/{course_id}"),
        format!("/api/matriculations/{matriculation_id}"),
        format!("/api/evaluations/{evaluation_id}"),
        format!("/api/schedules/{schedule_id}"),
    ] {
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} should be gone");
    }
    for uri in [
        "/api/courses",
        "/api/matriculations",
        "/api/evaluations",
        "/api/schedules",
    ] {
        let (_, body) = send(&app, "GET", uri, None).await;
        assert!(body["data"].as_array().unwrap().is_empty(), "{uri} not empty");
    }

    // The student is not owned by the teacher and survives.
    let (status, _) = send(&app, "GET", &format!("/api/students/{student_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_endpoint_is_static() {
    let _guard = DB_LOCK.lock().await;
    let Some(app) = test_app().await else { return };

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}
