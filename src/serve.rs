//! HTTP server for the interactive chart view
//!
//! `discburst --serve` → renders the chart, starts a local server, opens the browser

use crate::chart::{html::HtmlRenderer, render_to_vec, ChartSpec, Summary, Sunburst};
use crate::error::{Error, Result};
use crate::reshape::{FlatRow, FlatTable};
use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, info, warn};

pub const DEFAULT_PORT: u16 = 3002;

/// Address the server binds to; the opened URL uses the same literal IP
pub fn bind_addr(port: u16) -> String {
    format!("127.0.0.1:{}", port)
}

pub fn view_url(port: u16) -> String {
    format!("http://{}", bind_addr(port))
}

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }
}

#[derive(Serialize)]
struct TablePayload<'a> {
    summary: Summary,
    rows: &'a [FlatRow],
}

/// A rendered response, before it is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn html(body: String) -> Self {
        Self { status: 200, content_type: "text/html; charset=utf-8", body }
    }

    fn json(body: String) -> Self {
        Self { status: 200, content_type: "application/json", body }
    }

    fn not_found() -> Self {
        Self { status: 404, content_type: "text/plain", body: "Not found".to_string() }
    }
}

/// Everything the server hands out, rendered once up front
pub struct ChartSite {
    page: String,
    table: FlatTable,
    sunburst: Sunburst,
}

impl ChartSite {
    pub fn new(table: FlatTable, spec: &ChartSpec) -> Result<Self> {
        let page = String::from_utf8_lossy(&render_to_vec(&HtmlRenderer, &table, spec)?).into_owned();
        let sunburst = Sunburst::build(&table, &spec.path, &spec.values)?;
        Ok(Self { page, table, sunburst })
    }

    pub fn route(&self, method: &Method, url: &str) -> Result<Reply> {
        let path = url.split('?').next().unwrap_or("/");

        let reply = match (method, path) {
            (&Method::Get, "/") | (&Method::Get, "/index.html") => Reply::html(self.page.clone()),

            (&Method::Get, "/api/table") => {
                let payload = TablePayload {
                    summary: Summary::from_table(&self.table),
                    rows: &self.table.rows,
                };
                Reply::json(serde_json::to_string(&ApiResponse::success(payload))?)
            }

            (&Method::Get, "/api/sunburst") => {
                Reply::json(serde_json::to_string(&ApiResponse::success(&self.sunburst))?)
            }

            _ => Reply::not_found(),
        };
        Ok(reply)
    }
}

/// Start server, optionally open browser, serve until the process is stopped
pub fn start(port: u16, site: ChartSite, open_browser: bool) -> Result<()> {
    let addr = bind_addr(port);
    let server = Server::http(&addr).map_err(|e| Error::Serve(e.to_string()))?;

    let url = view_url(port);
    eprintln!("\n\x1b[1;32mdiscburst\x1b[0m");
    eprintln!("   {}\n", url);
    info!(%addr, "serving chart");

    if open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        }
    }

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &site) {
            warn!(error = %e, "request failed");
        }
    }

    Ok(())
}

fn handle_request(request: Request, site: &ChartSite) -> Result<()> {
    let method = request.method().clone();
    let url = request.url().to_string();
    let reply = site.route(&method, &url)?;
    debug!(?method, %url, status = reply.status, "request");

    let header = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        .map_err(|_| Error::Serve(format!("invalid content type: {}", reply.content_type)))?;
    let response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header);
    request.respond(response)?;
    Ok(())
}
