use chrono::Utc;
use serde_json::json;

#[derive(Clone, Debug)]
pub struct Logger {
    rid: u64,
}

impl Logger {
    /// Creates a new `Logger`.
    ///
    /// # Panics
    ///
    /// Panics if `rid` is zero.
    #[must_use]
    pub fn new(rid: u64) -> Self {
        assert!(rid > 0, "Logger rid must be non-zero");
        Self { rid }
    }

    /// Creates a `Logger` with a request id derived from the wall clock
    /// and the process id.
    #[must_use]
    pub fn with_generated_rid() -> Self {
        let rid = (Utc::now().timestamp_millis() as u64) ^ u64::from(std::process::id());
        Self::new(rid.max(1))
    }

    pub fn info(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("info", subsystem, action, message);
    }

    pub fn error(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("error", subsystem, action, message);
    }

    fn emit(&self, level: &str, subsystem: &str, action: &str, message: &str) {
        let log_entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "level": level,
            "rid": self.rid,
            "subsystem": subsystem,
            "action": action,
            "msg": message,
        });

        // JSONL on stdout, errors on stderr.
        if level == "error" {
            eprintln!("{log_entry}");
        } else {
            println!("{log_entry}");
        }
    }
}
