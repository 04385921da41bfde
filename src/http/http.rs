use std::collections::HashMap;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::bencode_formatter::BencodeFormatter;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::transport::Transport;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::traits::response_formatter::ResponseFormatter;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/announce/{passkey}").route(web::get().to(http_service_announce_key)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.service(web::resource("/scrape/{passkey}").route(web::get().to(http_service_scrape_key)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: Arc<HttpTrackersConfig>
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads as usize;
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: http_server_object,
    });

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads.max(1))
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(request, data.as_ref().clone(), None).await
}

pub async fn http_service_announce_key(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_announce_handler(request, data.as_ref().clone(), Some(path.into_inner())).await
}

pub async fn http_service_announce_handler(request: HttpRequest, data: Arc<HttpServiceData>, passkey: Option<String>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    let ip = http_service_retrieve_remote_ip(&request, &data);
    if let Some(ip) = ip {
        http_service_stats_log(ip, &tracker, StatsEvent::Tcp4AnnouncesHandled, StatsEvent::Tcp6AnnouncesHandled);
    }

    let mut query = parse_query(Some(request.query_string().to_string()));
    if query_value(&query, "compact").as_deref() != Some("1") {
        return http_service_error(&tracker, ip, &TrackerError::NonCompact);
    }

    let passkey = passkey.or_else(|| query_value(&query, "passkey"));
    let user_id = match tracker.resolve_user(passkey.as_deref()).await {
        Ok(user_id) => user_id,
        Err(error) => { return http_service_error(&tracker, ip, &error); }
    };

    // A client supplied `ip` only counts when the remote address is unknown.
    if let Some(ip) = ip {
        query.insert(String::from("ip"), vec![ip.to_string().into_bytes()]);
    }
    let client = http_service_user_agent(&request);
    if let Err(error) = tracker.check_whitelist(&client).await {
        return http_service_error(&tracker, ip, &error);
    }
    query.insert(String::from("client"), vec![client.into_bytes()]);

    let body = tracker.announce(Transport::Http, user_id, &query).await;
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_scrape_handler(request, data.as_ref().clone(), None).await
}

pub async fn http_service_scrape_key(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    http_service_scrape_handler(request, data.as_ref().clone(), Some(path.into_inner())).await
}

pub async fn http_service_scrape_handler(request: HttpRequest, data: Arc<HttpServiceData>, passkey: Option<String>) -> HttpResponse
{
    let tracker = data.torrent_tracker.clone();
    let ip = http_service_retrieve_remote_ip(&request, &data);
    if let Some(ip) = ip {
        http_service_stats_log(ip, &tracker, StatsEvent::Tcp4ScrapesHandled, StatsEvent::Tcp6ScrapesHandled);
    }

    let query = parse_query(Some(request.query_string().to_string()));
    let passkey = passkey.or_else(|| query_value(&query, "passkey"));
    let user_id = match tracker.resolve_user(passkey.as_deref()).await {
        Ok(user_id) => user_id,
        Err(error) => { return http_service_error(&tracker, ip, &error); }
    };
    if let Err(error) = tracker.check_whitelist(&http_service_user_agent(&request)).await {
        return http_service_error(&tracker, ip, &error);
    }

    let body = tracker.scrape(Transport::Http, user_id, ip, &query).await;
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(body)
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.torrent_tracker;
    let ip = http_service_retrieve_remote_ip(&request, &data);
    debug!("[HTTP] Request from {ip:?}: 404 Not Found ({})", request.path());
    if let Some(ip) = ip {
        http_service_stats_log(ip, tracker, StatsEvent::Tcp4NotFound, StatsEvent::Tcp6NotFound);
    }
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(
        BencodeFormatter.error(&TrackerError::UnknownRequest, tracker.announce_interval())
    )
}

pub fn http_service_error(tracker: &TorrentTracker, ip: Option<IpAddr>, error: &TrackerError) -> HttpResponse
{
    match ip {
        Some(IpAddr::V6(_)) => tracker.update_stats(StatsEvent::Tcp6Failure, 1),
        _ => tracker.update_stats(StatsEvent::Tcp4Failure, 1)
    }
    debug!("[HTTP] Request from {ip:?} failed: {error}");
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(
        BencodeFormatter.error(error, tracker.announce_interval())
    )
}

pub fn http_service_stats_log(ip: IpAddr, tracker: &TorrentTracker, v4: StatsEvent, v6: StatsEvent)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
        tracker.update_stats(v4, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
        tracker.update_stats(v6, 1);
    }
}

/// The configured real-ip header wins over the socket address when it
/// holds a parseable address.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Option<IpAddr>
{
    let real_ip = data.http_trackers_config.real_ip.as_str();
    if !real_ip.is_empty() {
        let header_ip = request.headers().get(real_ip)
            .and_then(|header| header.to_str().ok())
            .and_then(|value| IpAddr::from_str(value.trim()).ok());
        if header_ip.is_some() {
            return header_ip;
        }
    }
    request.peer_addr().map(|addr| addr.ip())
}

pub fn http_service_user_agent(request: &HttpRequest) -> String
{
    request.headers().get(http::header::USER_AGENT)
        .and_then(|header| header.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn query_value(query: &HashMap<String, Vec<Vec<u8>>>, key: &str) -> Option<String>
{
    query.get(key)
        .and_then(|values| values.first())
        .map(|value| String::from_utf8_lossy(value).into_owned())
}
