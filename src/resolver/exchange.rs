//! Wire-level DNS exchange over UDP with TCP fallback.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpStream, UdpSocket};

use super::{DnsExchange, DnsResponse};
use crate::config::{DEFAULT_QUERY_TIMEOUT_SECS, DNS_PORT, EDNS_BUFFER_SIZE};
use crate::error_handling::LookupError;

/// DNS exchange over UDP, falling back to TCP when the answer is truncated.
///
/// Each call is a single request/response with a fixed timeout covering the
/// whole exchange. Queries carry EDNS0 with a 4096-byte buffer and the DO
/// bit, so DNSSEC records are returned where present.
#[derive(Debug, Clone)]
pub struct UdpExchange {
    timeout: Duration,
}

impl UdpExchange {
    /// Creates an exchange with the given per-query timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for UdpExchange {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS))
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn query(
        &self,
        qname: &str,
        qtype: RecordType,
        class: DNSClass,
        recursion_desired: bool,
        server: &str,
    ) -> Result<DnsResponse, LookupError> {
        let (id, request) = build_query(qname, qtype, class, recursion_desired)?;
        let addr = resolve_server(server).await?;

        let response = tokio::time::timeout(self.timeout, async {
            let reply = exchange_udp(&request, addr, server).await?;
            let message = Message::from_vec(&reply)?;
            if message.id() != id {
                return Err(LookupError::IdMismatch {
                    server: server.to_string(),
                });
            }
            if message.truncated() {
                log::debug!("truncated UDP answer from {server}, retrying over TCP");
                let reply = exchange_tcp(&request, addr, server).await?;
                let message = Message::from_vec(&reply)?;
                if message.id() != id {
                    return Err(LookupError::IdMismatch {
                        server: server.to_string(),
                    });
                }
                return Ok(message);
            }
            Ok(message)
        })
        .await
        .map_err(|_| LookupError::Timeout {
            server: server.to_string(),
            timeout: self.timeout,
        })??;

        Ok(DnsResponse {
            answers: response.answers().to_vec(),
            authorities: response.name_servers().to_vec(),
        })
    }
}

/// Builds a wire-format query and returns its message id alongside the bytes.
fn build_query(
    qname: &str,
    qtype: RecordType,
    class: DNSClass,
    recursion_desired: bool,
) -> Result<(u16, Vec<u8>), LookupError> {
    let mut name = Name::from_utf8(qname).map_err(|source| LookupError::InvalidName {
        name: qname.to_string(),
        source,
    })?;
    name.set_fqdn(true);

    let mut query = Query::query(name, qtype);
    query.set_query_class(class);

    let id = rand::random::<u16>();
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(recursion_desired)
        .add_query(query);

    let mut edns = Edns::new();
    edns.set_max_payload(EDNS_BUFFER_SIZE);
    edns.set_version(0);
    edns.set_dnssec_ok(true);
    message.set_edns(edns);

    let bytes = message.to_vec()?;
    Ok((id, bytes))
}

/// Resolves a nameserver address string into a socket address.
///
/// Accepts bare IPs, `host:port` pairs, and hostnames (with or without a
/// trailing dot); bare hosts get the standard DNS port.
async fn resolve_server(server: &str) -> Result<SocketAddr, LookupError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let with_port = match server.parse::<IpAddr>() {
        Ok(IpAddr::V6(ip)) => format!("[{ip}]:{DNS_PORT}"),
        Ok(ip) => format!("{ip}:{DNS_PORT}"),
        Err(_) => format!("{}:{DNS_PORT}", server.trim_end_matches('.')),
    };
    lookup_host(with_port)
        .await
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| LookupError::InvalidServer(server.to_string()))
}

async fn exchange_udp(
    request: &[u8],
    addr: SocketAddr,
    server: &str,
) -> Result<Vec<u8>, LookupError> {
    let bind = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let io_err = |source| LookupError::Io {
        server: server.to_string(),
        source,
    };

    let socket = UdpSocket::bind(bind).await.map_err(io_err)?;
    socket.connect(addr).await.map_err(io_err)?;
    socket.send(request).await.map_err(io_err)?;

    let mut buffer = vec![0u8; EDNS_BUFFER_SIZE as usize];
    let len = socket.recv(&mut buffer).await.map_err(io_err)?;
    buffer.truncate(len);
    Ok(buffer)
}

/// Exchanges one message over TCP using the 2-byte length-prefixed framing.
async fn exchange_tcp(
    request: &[u8],
    addr: SocketAddr,
    server: &str,
) -> Result<Vec<u8>, LookupError> {
    let io_err = |source| LookupError::Io {
        server: server.to_string(),
        source,
    };

    let mut stream = TcpStream::connect(addr).await.map_err(io_err)?;

    let mut framed = Vec::with_capacity(request.len() + 2);
    framed.extend_from_slice(&(request.len() as u16).to_be_bytes());
    framed.extend_from_slice(request);
    stream.write_all(&framed).await.map_err(io_err)?;
    stream.flush().await.map_err(io_err)?;

    let mut len_bytes = [0u8; 2];
    stream.read_exact(&mut len_bytes).await.map_err(io_err)?;
    let len = u16::from_be_bytes(len_bytes) as usize;

    let mut buffer = vec![0u8; len];
    stream.read_exact(&mut buffer).await.map_err(io_err)?;
    Ok(buffer)
}
