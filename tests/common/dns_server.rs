use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// UDP DNS server serving a small canned zone.
///
/// - `example.com` has A, AAAA, MX and TXT records but no CNAME
/// - `nonexistent.example` is NXDOMAIN
/// - `servfail.example` is SERVFAIL
///
/// A silent server never answers.
pub struct TestDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::spawn(false).await
    }

    pub async fn silent() -> Result<Self, std::io::Error> {
        Self::spawn(true).await
    }

    async fn spawn(silent: bool) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if silent {
                                continue;
                            }
                            if let Some(response) = answer(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// `host:port` to pass with `-s`.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for TestDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn answer(query: &[u8]) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let (name, qtype_at) = read_name(query, 12)?;
    let qtype = u16::from_be_bytes([*query.get(qtype_at)?, *query.get(qtype_at + 1)?]);
    let question = query.get(12..qtype_at + 4)?;

    let (rcode, answers) = match name.as_str() {
        "nonexistent.example" => (3, Vec::new()),
        "servfail.example" => (2, Vec::new()),
        "example.com" => (0, zone(qtype)),
        _ => (3, Vec::new()),
    };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(0x81);
    response.push(0x80 | rcode);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(question);

    for (rtype, rdata) in answers {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&3600u32.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    Some(response)
}

fn zone(qtype: u16) -> Vec<(u16, Vec<u8>)> {
    match qtype {
        1 => vec![(1, vec![93, 184, 216, 34])],
        28 => vec![(
            28,
            vec![
                0x26, 0x06, 0x28, 0x00, 0x02, 0x20, 0x00, 0x01, 0x02, 0x48, 0x18, 0x93, 0x25,
                0xc8, 0x19, 0x46,
            ],
        )],
        15 => {
            let mut rdata = vec![0x00, 0x0a];
            rdata.extend_from_slice(b"\x04mail\x07example\x03com\x00");
            vec![(15, rdata)]
        }
        16 => {
            let text = b"v=spf1 -all";
            let mut rdata = vec![text.len() as u8];
            rdata.extend_from_slice(text);
            vec![(16, rdata)]
        }
        _ => Vec::new(),
    }
}

/// Decode an uncompressed name; returns it without the root dot and the
/// offset just past it.
fn read_name(message: &[u8], mut offset: usize) -> Option<(String, usize)> {
    let mut labels = Vec::new();
    loop {
        let len = *message.get(offset)? as usize;
        offset += 1;
        if len == 0 {
            break;
        }
        let label = message.get(offset..offset + len)?;
        labels.push(String::from_utf8_lossy(label).to_lowercase());
        offset += len;
    }
    Some((labels.join("."), offset))
}
