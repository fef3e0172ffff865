use {
    crate::*,
    base::{log_error, log_info, log_warn},
    bytes::Bytes,
    http::{
        HeaderValue, Method, Request, Response, StatusCode,
        header::{ALLOW, CONNECTION, CONTENT_TYPE},
    },
    http_body_util::{BodyExt, Full, Limited},
    hyper::{body::Incoming, server::conn::http1, service::service_fn},
    hyper_util::rt::{TokioIo, TokioTimer},
    std::{convert::Infallible, fmt, net::SocketAddr, sync::Arc, time::Duration},
    tokio::{
        net::{TcpListener, TcpStream, ToSocketAddrs},
        task::JoinHandle,
    },
};

// request line plus headers, larger heads get 431
pub const MAX_HEAD_BYTES: usize = 16 * 1024;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

const HEADER_TIMEOUT_SECS: u64 = 10;

// pause after a failed accept so a persistent error does not spin
const ACCEPT_BACKOFF_MS: u64 = 100;

pub const DEVICE_UNAVAILABLE_MESSAGE: &str = "Could not open webcam (is it connected?)";

#[derive(Debug)]
pub enum WebError {
    Io(std::io::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<std::io::Error> for WebError {
    fn from(err: std::io::Error) -> Self {
        WebError::Io(err)
    }
}

struct App<B> {
    backend: B,
    config: CaptureConfig,
}

/// HTTP front end: `GET /` serves the capture page, `POST /capture` runs a
/// capture session and reports the result as plain text.
pub struct WebServer {
    _accept_task: JoinHandle<()>,
    local_addr: SocketAddr,
}

impl WebServer {
    /// Bind a TCP listener and start serving in a background task.
    ///
    /// Every connection gets its own task and carries exactly one request,
    /// parsed and answered by hyper.
    /// Capture sessions run on tokio's blocking pool, so a session waiting
    /// for ESC does not stop other requests from being answered.
    pub async fn bind<B: CaptureBackend>(
        addr: impl ToSocketAddrs,
        backend: B,
        config: CaptureConfig,
    ) -> Result<Self, WebError> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        let app = Arc::new(App { backend, config });

        let accept_task = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, peer)) => {
                        let app = Arc::clone(&app);
                        tokio::spawn(async move {
                            if let Err(error) = serve_connection(stream, app).await {
                                log_warn!("web: connection from {} failed: {}", peer, error);
                            }
                        });
                    }
                    Err(error) => {
                        log_warn!("web: accept error: {}", error);
                        tokio::time::sleep(Duration::from_millis(ACCEPT_BACKOFF_MS)).await;
                    }
                }
            }
        });

        Ok(Self {
            _accept_task: accept_task,
            local_addr,
        })
    }

    /// Return the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

impl Drop for WebServer {
    fn drop(&mut self) {
        self._accept_task.abort();
    }
}

/// The capture page: instructions plus a form that POSTs to `/capture`.
pub fn render_index(config: &CaptureConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Capture Image</title>
  </head>
  <body>
    <h1>Webcam Capture Demo</h1>
    <p>
      When you click "Capture", the server will open a local camera window.<br>
      Stand in front of your webcam and press ESC to close the window.<br>
      The final image will be saved to {}.
    </p>

    <form action="/capture" method="post">
      <button type="submit">Capture</button>
    </form>
  </body>
</html>
"#,
        config.output_path().display()
    )
}

async fn serve_connection<B: CaptureBackend>(
    stream: TcpStream,
    app: Arc<App<B>>,
) -> Result<(), hyper::Error> {
    let service = service_fn(move |request: Request<Incoming>| {
        let app = Arc::clone(&app);
        async move { Ok::<_, Infallible>(handle_request(&app, request).await) }
    });

    // one request per connection, malformed or oversized heads are answered by hyper with 400/431
    http1::Builder::new()
        .keep_alive(false)
        .max_buf_size(MAX_HEAD_BYTES)
        .timer(TokioTimer::new())
        .header_read_timeout(Duration::from_secs(HEADER_TIMEOUT_SECS))
        .serve_connection(TokioIo::new(stream), service)
        .await
}

async fn handle_request<B: CaptureBackend>(
    app: &Arc<App<B>>,
    request: Request<Incoming>,
) -> Response<Full<Bytes>> {
    log_info!("web: {} {}", request.method(), request.uri());
    let (parts, body) = request.into_parts();

    // form bodies carry nothing we use, but draining them answers `Expect: 100-continue`
    if let Err(error) = Limited::new(body, MAX_BODY_BYTES).collect().await {
        log_warn!("web: rejecting body: {}", error);
        return respond(
            StatusCode::PAYLOAD_TOO_LARGE,
            "text/plain; charset=utf-8",
            "Payload Too Large".to_string(),
        );
    }

    route(app, &parts.method, parts.uri.path()).await
}

async fn route<B: CaptureBackend>(
    app: &Arc<App<B>>,
    method: &Method,
    path: &str,
) -> Response<Full<Bytes>> {
    match (method, path) {
        (&Method::GET, "/") => respond(
            StatusCode::OK,
            "text/html; charset=utf-8",
            render_index(&app.config),
        ),
        (&Method::POST, "/capture") => capture(app).await,
        (_, "/") => method_not_allowed("GET"),
        (_, "/capture") => method_not_allowed("POST"),
        _ => respond(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            "Not Found".to_string(),
        ),
    }
}

// Every outcome except an unexpected failure answers 200, the body says what happened.
async fn capture<B: CaptureBackend>(app: &Arc<App<B>>) -> Response<Full<Bytes>> {
    let saved_message = format!(
        "Image captured and saved to {}!",
        app.config.output_path().display()
    );

    let session = Arc::clone(app);
    let result =
        tokio::task::spawn_blocking(move || run_capture(&session.backend, &session.config)).await;

    match result {
        Ok(Ok(outcome)) => {
            if outcome != CaptureOutcome::Saved(app.config.output_path().to_path_buf()) {
                log_warn!("web: capture ended without saving ({:?})", outcome);
            }
            respond(StatusCode::OK, "text/plain; charset=utf-8", saved_message)
        }
        Ok(Err(CaptureError::DeviceOpen(error))) => {
            log_warn!("web: {}", error);
            respond(
                StatusCode::OK,
                "text/plain; charset=utf-8",
                DEVICE_UNAVAILABLE_MESSAGE.to_string(),
            )
        }
        Ok(Err(error)) => {
            log_error!("web: capture failed: {}", error);
            internal_error()
        }
        Err(error) => {
            log_error!("web: capture task failed: {}", error);
            internal_error()
        }
    }
}

fn respond(status: StatusCode, content_type: &'static str, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(CONNECTION, HeaderValue::from_static("close"));
    response
}

fn method_not_allowed(allow: &'static str) -> Response<Full<Bytes>> {
    let mut response = respond(
        StatusCode::METHOD_NOT_ALLOWED,
        "text/plain; charset=utf-8",
        "Method Not Allowed".to_string(),
    );
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(allow));
    response
}

fn internal_error() -> Response<Full<Bytes>> {
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        "text/plain; charset=utf-8",
        "Internal Server Error".to_string(),
    )
}
