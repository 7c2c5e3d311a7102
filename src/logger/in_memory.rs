use crate::logger::AuditLogger;
use crate::models::AuditLogEntry;
use log::debug;

#[derive(Default)]
pub struct InMemoryAuditLogger {
    logs: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        debug!("Audit {:?}: {}", entry.action, entry.payload);
        self.logs.push(entry);
    }
}
