//! Full lifecycle against the server over real TCP.
//!
//! # Design
//! Starts the server on a random port backed by `MemoryTodoStore`, then
//! drives it with ureq so the wire format (status lines, headers, bodies)
//! is checked the way an external client sees it.

use std::{net::SocketAddr, sync::Arc};

use todo_core::{MemoryTodoStore, Todo};

struct Reply {
    status: u16,
    content_type: Option<String>,
    body: String,
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, Arc::new(MemoryTodoStore::new())).await
        })
        .unwrap();
    });

    addr
}

/// Send a request, returning 4xx/5xx responses as data rather than `Err`.
fn send(method: &str, url: &str, body: Option<&str>) -> Reply {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (method, body) {
        ("GET", _) => agent.get(url).call(),
        ("DELETE", _) => agent.delete(url).call(),
        ("POST", Some(body)) => agent
            .post(url)
            .content_type("application/json")
            .send(body.as_bytes()),
        ("PATCH", Some(body)) => agent
            .patch(url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (other, _) => panic!("unsupported request: {other}"),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Reply {
        status,
        content_type,
        body,
    }
}

#[test]
fn crud_lifecycle() {
    let base = format!("http://{}", start_server());

    // create
    let reply = send("POST", &format!("{base}/todos"), Some(r#"{"title":"Buy milk"}"#));
    assert_eq!(reply.status, 200);
    assert!(reply
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/json")));
    let created: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);
    assert_eq!(created.priority, 3);
    let url = format!("{base}/todos/{}", created.id);

    // get
    let reply = send("GET", &url, None);
    assert_eq!(reply.status, 200);
    let fetched: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(fetched, created);

    // list
    let reply = send("GET", &format!("{base}/todos"), None);
    assert_eq!(reply.status, 200);
    let todos: Vec<Todo> = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(todos, vec![created.clone()]);

    // update
    let reply = send("PATCH", &url, Some(r#"{"completed":true}"#));
    assert_eq!(reply.status, 200);
    let updated: Todo = serde_json::from_str(&reply.body).unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, created.title);

    // get reflects the update
    let reply = send("GET", &url, None);
    assert_eq!(reply.status, 200);
    let fetched: Todo = serde_json::from_str(&reply.body).unwrap();
    assert_eq!(fetched, updated);

    // delete
    let reply = send("DELETE", &url, None);
    assert_eq!(reply.status, 204);
    assert!(reply.body.is_empty());

    // get after delete
    let reply = send("GET", &url, None);
    assert_eq!(reply.status, 404);
    assert!(reply
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/plain")));
}

#[test]
fn invalid_id_is_plain_text_400() {
    let base = format!("http://{}", start_server());

    let reply = send("GET", &format!("{base}/todos/not-a-uuid"), None);
    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, "invalid todo id");
}
