//! tokio HTTP server driving the game controller.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{timeout, Duration};

use super::{parse_form_move, parse_head, parse_json_move, Method, Request, RequestError, Response};
use super::{MAX_BODY_SIZE, MAX_HEAD_SIZE};
use crate::core::{GameController, LayoutGenerator, Move, View};
use crate::render::{self, Assets};

/// Default timeout for reading one request (10 seconds).
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared server state: the single live game and the static assets.
///
/// The controller sits behind a mutex so each request runs it to
/// completion before the next one starts.
pub struct GameServer<G: LayoutGenerator> {
    controller: Mutex<GameController<'static, G>>,
    assets: Assets,
    read_timeout: Duration,
}

impl<G: LayoutGenerator> GameServer<G> {
    pub fn new(controller: GameController<'static, G>, assets: Assets) -> Self {
        Self {
            controller: Mutex::new(controller),
            assets,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Run the controller for one request.
    fn play(&self, mv: Option<Move>) -> anyhow::Result<View> {
        let mut controller = self
            .controller
            .lock()
            .map_err(|_| anyhow::anyhow!("game controller lock poisoned"))?;
        controller.handle(mv).map_err(|e| anyhow::anyhow!(e))
    }

    /// Map a parsed request to a response.
    pub fn route(&self, req: &Request) -> Response {
        match (&req.method, req.path.as_str()) {
            (Method::Get, "/") => self.html_view(None),
            (Method::Post, "/") => self.html_view(parse_form_move(&req.body)),
            (Method::Get, "/style.css") => match self.assets.stylesheet() {
                Some(css) => Response::new(200, "text/css", css.as_bytes().to_vec()),
                None => Response::not_found(),
            },
            (Method::Get, "/api/state") => self.json_view(None),
            (Method::Post, "/api/move") => match parse_json_move(&req.body) {
                Some(mv) => self.json_view(Some(mv)),
                None => Response::bad_request("expected {\"row\": <int>, \"col\": <int>}"),
            },
            (Method::Other(_), "/" | "/style.css" | "/api/state" | "/api/move") => {
                Response::new(405, "text/plain; charset=utf-8", "Method Not Allowed")
            }
            _ => Response::not_found(),
        }
    }

    fn html_view(&self, mv: Option<Move>) -> Response {
        let view = match self.play(mv) {
            Ok(view) => view,
            Err(e) => {
                log::error!("failed to handle request: {}", e);
                return Response::internal_error();
            }
        };
        match render::render_html(&view, &self.assets) {
            Some(page) => Response::html(page),
            None => {
                log::error!("index.html is missing, cannot render the board");
                Response::not_found()
            }
        }
    }

    fn json_view(&self, mv: Option<Move>) -> Response {
        let rendered = self
            .play(mv)
            .and_then(|view| render::render_json(&view).map_err(|e| anyhow::anyhow!(e)));
        match rendered {
            Ok(body) => Response::json(body),
            Err(e) => {
                log::error!("failed to handle request: {}", e);
                Response::internal_error()
            }
        }
    }
}

/// Accept connections until the listener fails, one task per connection.
pub async fn serve<G>(listener: TcpListener, server: Arc<GameServer<G>>) -> anyhow::Result<()>
where
    G: LayoutGenerator + Send + 'static,
{
    log::info!("listening on http://{}", listener.local_addr()?);
    loop {
        let (stream, peer) = listener.accept().await?;
        let server = server.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &server).await {
                log::warn!("connection from {} failed: {}", peer, e);
            }
        });
    }
}

/// Read one request, answer it and close the connection.
pub async fn handle_connection<G: LayoutGenerator>(
    mut stream: TcpStream,
    server: &GameServer<G>,
) -> anyhow::Result<()> {
    let request = timeout(server.read_timeout, read_request(&mut stream))
        .await
        .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", server.read_timeout))??;
    let response = match request {
        Ok(req) => {
            log::debug!("{:?} {}", req.method, req.path);
            server.route(&req)
        }
        Err(e) => {
            log::debug!("rejecting request: {}", e);
            Response::bad_request(&e.to_string())
        }
    };
    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// Outer error is an I/O failure; inner error is a malformed request that
/// still deserves a 400.
async fn read_request(stream: &mut TcpStream) -> anyhow::Result<Result<Request, RequestError>> {
    let mut reader = BufReader::new(stream);
    let mut head = Vec::new();
    {
        let mut limited = (&mut reader).take(MAX_HEAD_SIZE as u64);
        loop {
            let start = head.len();
            let read = limited.read_until(b'\n', &mut head).await?;
            if read == 0 {
                if head.len() >= MAX_HEAD_SIZE {
                    return Ok(Err(RequestError::HeadTooLarge));
                }
                return Err(anyhow::anyhow!("Connection closed by peer"));
            }
            let line = &head[start..];
            if line == b"\r\n" || line == b"\n" {
                break;
            }
        }
    }
    let head = match std::str::from_utf8(&head) {
        Ok(head) => head,
        Err(_) => return Ok(Err(RequestError::BadRequestLine)),
    };
    let mut req = match parse_head(head) {
        Ok(req) => req,
        Err(e) => return Ok(Err(e)),
    };
    let mut body = vec![0u8; req.content_length.min(MAX_BODY_SIZE)];
    reader.read_exact(&mut body).await?;
    req.body = body;
    Ok(Ok(req))
}
