#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// One answer record the mock puts in its reply.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    MX(u16, &'static str),
    CNAME(&'static str),
    TXT(Vec<&'static str>),
}

/// How the mock reacts to each UDP query.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// NOERROR with these answers.
    Answers(Vec<MockAnswer>),
    /// Empty answer section with this RCODE.
    Rcode(u8),
    /// TC bit set over UDP; the full answers are served over TCP.
    Truncated(Vec<MockAnswer>),
    /// Zero-length datagram.
    Empty,
    /// Bytes that are not a DNS message.
    Garbage,
    /// A reply with the wrong ID first, then the real answers.
    WrongIdFirst(Vec<MockAnswer>),
    /// Never answer.
    Silent,
}

/// Wire-level DNS server mock for tests.
///
/// Listens on a random localhost port, UDP and TCP, and answers every
/// query according to its [`MockReply`].
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let (socket, listener) = Self::bind_pair().await?;
        let addr = socket.local_addr()?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            for datagram in Self::udp_replies(&reply, &buf[..len]) {
                                let _ = socket.send_to(&datagram, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let answers = match &reply {
                                MockReply::Truncated(answers) => answers.clone(),
                                _ => Vec::new(),
                            };
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = build_response(&query, 0, false, &answers);
                                let _ = stream
                                    .write_all(&(response.len() as u16).to_be_bytes())
                                    .await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// UDP socket and TCP listener sharing one random port.
    async fn bind_pair() -> Result<(UdpSocket, TcpListener), std::io::Error> {
        let mut last_error = None;
        for _ in 0..10 {
            let socket = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = socket.local_addr()?;
            match TcpListener::bind(addr).await {
                Ok(listener) => return Ok((socket, listener)),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| std::io::Error::other("no free port")))
    }

    fn udp_replies(reply: &MockReply, query: &[u8]) -> Vec<Vec<u8>> {
        if query.len() < 12 {
            return vec![];
        }
        match reply {
            MockReply::Answers(answers) => vec![build_response(query, 0, false, answers)],
            MockReply::Rcode(rcode) => vec![build_response(query, *rcode, false, &[])],
            MockReply::Truncated(_) => vec![build_response(query, 0, true, &[])],
            MockReply::Empty => vec![Vec::new()],
            MockReply::Garbage => vec![vec![query[0], query[1], 0x81]],
            MockReply::WrongIdFirst(answers) => {
                let mut stray = build_response(query, 0, false, answers);
                stray[0] = !stray[0];
                vec![stray, build_response(query, 0, false, answers)]
            }
            MockReply::Silent => vec![],
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Server as the `host:port` string the exchange expects.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Build a reply to `query` by hand.
pub fn build_response(query: &[u8], rcode: u8, truncated: bool, answers: &[MockAnswer]) -> Vec<u8> {
    let question_end = question_end(query);
    let mut response = Vec::with_capacity(512);

    // Transaction ID
    response.extend_from_slice(&query[0..2]);

    // QR=1, RD=1, TC as requested; RA=1 and RCODE
    response.push(if truncated { 0x83 } else { 0x81 });
    response.push(0x80 | (rcode & 0x0f));

    // QDCOUNT=1, ANCOUNT, NSCOUNT=0, ARCOUNT=0
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end]);

    for answer in answers {
        let (rtype, rdata) = match answer {
            MockAnswer::A(ip) => (1u16, ip.octets().to_vec()),
            MockAnswer::AAAA(ip) => (28, ip.octets().to_vec()),
            MockAnswer::CNAME(target) => (5, encode_name(target)),
            MockAnswer::MX(preference, exchange) => {
                let mut rdata = preference.to_be_bytes().to_vec();
                rdata.extend(encode_name(exchange));
                (15, rdata)
            }
            MockAnswer::TXT(segments) => {
                let mut rdata = Vec::new();
                for segment in segments {
                    rdata.push(segment.len() as u8);
                    rdata.extend_from_slice(segment.as_bytes());
                }
                (16, rdata)
            }
        };

        response.extend_from_slice(&[0xc0, 0x0c]); // Name pointer to question
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]); // Class IN
        response.extend_from_slice(&300u32.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}

/// Offset just past QNAME, QTYPE and QCLASS of the first question.
fn question_end(query: &[u8]) -> usize {
    let mut offset = 12;
    while offset < query.len() && query[offset] != 0 {
        offset += query[offset] as usize + 1;
    }
    (offset + 5).min(query.len())
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}
