use std::sync::Arc;
use std::thread::JoinHandle;

use crate::app::domain::messages::SubmissionOutcome;
use crate::app::domain::order::OrderPayload;
use crate::app::domain::settings::StoreSettings;
use crate::app::infrastructure::error::Result;

/// Something that can hand an order to the shop.
pub trait OrderTransport: Send + Sync {
    /// Returns `Ok` whenever the request went out without a transport
    /// error. Application-level acknowledgements are not observable.
    fn deliver(&self, payload: &OrderPayload) -> Result<()>;
}

/// JSON POST to the configured intake URL.
#[derive(Debug, Clone)]
pub struct HttpOrderIntake {
    endpoint: String,
    timeout_secs: u64,
}

impl HttpOrderIntake {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs,
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::new(settings.order_endpoint.clone(), settings.request_timeout_secs)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OrderTransport for HttpOrderIntake {
    fn deliver(&self, payload: &OrderPayload) -> Result<()> {
        // with_json sets its own content type; pin it to the plain form
        minreq::post(&self.endpoint)
            .with_json(payload)?
            .with_header("Content-Type", "application/json")
            .with_timeout(self.timeout_secs)
            .send()?;
        Ok(())
    }
}

/// Deliver on a worker thread and report the outcome through `on_settled`.
pub fn deliver_in_background<T, F>(transport: Arc<T>, payload: OrderPayload, on_settled: F) -> JoinHandle<()>
where
    T: OrderTransport + ?Sized + 'static,
    F: FnOnce(SubmissionOutcome) + Send + 'static,
{
    std::thread::spawn(move || {
        let outcome = match transport.deliver(&payload) {
            Ok(()) => SubmissionOutcome::Delivered,
            Err(e) => SubmissionOutcome::Failed(e.to_string()),
        };
        on_settled(outcome);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::order::{Customer, Product};
    use crate::app::infrastructure::error::AppError;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    fn payload() -> OrderPayload {
        OrderPayload {
            order_id: "ORD-1760860800000".to_string(),
            customer: Customer {
                name: "An".to_string(),
                phone: "0900000000".to_string(),
                address: "Hanoi".to_string(),
            },
            product: Product {
                text: "Lan".to_string(),
                color: "#d62828".to_string(),
                font: "Times".to_string(),
            },
            payment_proof: "bill.png".to_string(),
        }
    }

    /// Read one HTTP request (headers + Content-Length body).
    fn read_request(stream: &mut std::net::TcpStream) -> (String, String) {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(split) = text.find("\r\n\r\n") {
                let head = text[..split].to_string();
                let length = head
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if raw.len() >= split + 4 + length {
                    let body = String::from_utf8_lossy(&raw[split + 4..split + 4 + length]).into_owned();
                    return (head, body);
                }
            }
        }
        (String::from_utf8_lossy(&raw).into_owned(), String::new())
    }

    #[test]
    fn test_posts_json_and_ignores_status() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            // An error status still counts as delivered
            stream
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
            request
        });

        let intake = HttpOrderIntake::new(format!("http://127.0.0.1:{}/orders", port), 5);
        intake.deliver(&payload()).unwrap();

        let (head, body) = server.join().unwrap();
        assert!(head.starts_with("POST /orders "));
        assert!(head
            .lines()
            .any(|l| l.eq_ignore_ascii_case("content-type: application/json")));

        let sent: OrderPayload = serde_json::from_str(&body).unwrap();
        assert_eq!(sent, payload());
    }

    #[test]
    fn test_refused_connection_is_transport_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let intake = HttpOrderIntake::new(format!("http://127.0.0.1:{}/orders", port), 5);
        let err = intake.deliver(&payload()).unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    struct FailingTransport;

    impl OrderTransport for FailingTransport {
        fn deliver(&self, _payload: &OrderPayload) -> Result<()> {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "timed out",
            )))
        }
    }

    struct AcceptingTransport;

    impl OrderTransport for AcceptingTransport {
        fn deliver(&self, _payload: &OrderPayload) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_background_delivery_reports_outcome() {
        let (tx, rx) = mpsc::channel();
        deliver_in_background(Arc::new(AcceptingTransport), payload(), move |o| {
            tx.send(o).unwrap();
        })
        .join()
        .unwrap();
        assert_eq!(rx.recv().unwrap(), SubmissionOutcome::Delivered);

        let (tx, rx) = mpsc::channel();
        deliver_in_background(Arc::new(FailingTransport), payload(), move |o| {
            tx.send(o).unwrap();
        })
        .join()
        .unwrap();
        match rx.recv().unwrap() {
            SubmissionOutcome::Failed(reason) => assert!(reason.contains("timed out")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_from_settings() {
        let settings = StoreSettings {
            order_endpoint: "http://localhost:8080/intake".to_string(),
            ..Default::default()
        };
        assert_eq!(HttpOrderIntake::from_settings(&settings).endpoint(), "http://localhost:8080/intake");
    }
}
