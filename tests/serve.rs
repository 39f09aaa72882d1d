//! End-to-end tests over a real socket.

use in2http::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn test_hello_there_with_default_headers() {
    let shutdown = Shutdown::new();
    let addr = common::start_server(b"Hello there", &[], &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
    assert_eq!(res.text().await.unwrap(), "Hello there");

    shutdown.trigger();
}

#[tokio::test]
async fn test_empty_body_with_custom_headers() {
    let shutdown = Shutdown::new();
    let addr = common::start_server(
        b"",
        &["content-type: text/html", "server: in2http"],
        &shutdown,
    )
    .await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/html");
    assert_eq!(res.headers()["server"], "in2http");
    assert!(res.bytes().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_colons_in_header_value_reach_the_wire() {
    let shutdown = Shutdown::new();
    let addr = common::start_server(b"x", &["whatevers: Has:Some:Colons", "no colon"], &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.headers()["whatevers"], "Has:Some:Colons");
    assert!(res.headers().get("no colon").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_binary_body_is_byte_identical() {
    static PAYLOAD: [u8; 6] = [0x00, 0xff, 0xfe, b'\r', b'\n', 0x7f];

    let shutdown = Shutdown::new();
    let addr = common::start_server(&PAYLOAD, &["content-type: application/octet-stream"], &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/any/path?query=1", addr))
        .body("request body is ignored")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(&res.bytes().await.unwrap()[..], &PAYLOAD[..]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_get_identical_responses() {
    let shutdown = Shutdown::new();
    let addr = common::start_server(b"shared payload", &[], &shutdown).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .get(format!("http://{}/req/{}", addr, i))
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap(), "shared payload");
    }

    shutdown.trigger();
}
