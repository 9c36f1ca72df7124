//! Spin HTTP entry point.

use anyhow::{anyhow, Result};
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;
use tracing::{error, info, warn};

use folio_core::SiteConfig;
use folio_observability::{init_logging, LoggingConfig, LoggingError};
use folio_render::PageSink;

use crate::page::PortfolioPage;

/// Portfolio page handler.
#[http_component]
async fn handle_portfolio(req: IncomingRequest, response_out: ResponseOutparam) {
    match init_logging(&LoggingConfig::default()) {
        Ok(()) | Err(LoggingError::AlreadyInstalled(_)) => {}
        Err(e) => eprintln!("logging disabled: {}", e),
    }

    if let Err(e) = respond(req, response_out).await {
        error!(error = %e, "failed to serve portfolio page");
    }
}

async fn respond(req: IncomingRequest, response_out: ResponseOutparam) -> Result<()> {
    let method = req.method();
    if method != Method::Get {
        warn!(method = ?method, "method not allowed");
        let headers = Fields::from_list(&[("allow".to_owned(), b"GET".to_vec())])
            .map_err(|e| anyhow!("invalid headers: {:?}", e))?;
        let response = OutgoingResponse::new(headers);
        response
            .set_status_code(405)
            .map_err(|()| anyhow!("invalid status code"))?;
        response_out.set(response);
        return Ok(());
    }

    let path = req.path_with_query().unwrap_or_default();
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        (
            "cache-control".to_owned(),
            "public, max-age=3600, stale-while-revalidate=300".into(),
        ),
    ];
    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(200)
        .map_err(|()| anyhow!("invalid status code"))?;

    let body = response.take_body();
    response_out.set(response);
    let mut sink = PageSink::new(body);

    let page = PortfolioPage::new(SiteConfig::builtin()).build();
    page.stream_to(&mut sink).await?;

    info!(
        path = %path,
        sections = sink.sections_sent().len(),
        bytes = sink.bytes_sent(),
        "portfolio page streamed"
    );
    Ok(())
}
