use std::io;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::types::internal::Item;

/// Captures JSON-formatted log events emitted by this crate
///
/// The subscriber is installed as the thread-local default, so it sees
/// everything a current-thread `#[tokio::test]` runs. Keep the returned
/// guard alive for the duration of the test.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter(Arc::clone(&self.0))
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let sink = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .json()
            .with_max_level(Level::TRACE)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (sink, guard)
    }

    /// All events from `myshop` targets, oldest first
    pub fn events(&self) -> Vec<Value> {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .filter(|event| {
                event
                    .get("target")
                    .and_then(Value::as_str)
                    .is_some_and(|t| t.starts_with("myshop"))
            })
            .collect()
    }

    /// Events at `level` ("ERROR", "WARN", ...)
    pub fn events_at(&self, level: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event.get("level").and_then(Value::as_str) == Some(level))
            .collect()
    }
}

/// Read a field of a captured event
pub fn event_field<'a>(event: &'a Value, name: &str) -> Option<&'a Value> {
    event.get("fields").and_then(|fields| fields.get(name))
}

pub fn sample_item(item_id: i32, name: &str, price: f64) -> Item {
    Item {
        item_id,
        name: name.to_string(),
        price,
        description: Some(format!("{} from the test kitchen", name)),
        image_url: Some(format!("/images/{}.jpg", name.to_lowercase())),
    }
}

/// Secret long enough for `SecretManager`
pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";
