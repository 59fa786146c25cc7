use std::fmt;

use super::model::LogRecord;

/// Human-readable rendering, one line per record:
///
/// `[YYYY-MM-DD HH:MM:SS.mmm] LEVEL: message` — plus ` {k1=v1, k2=v2}` when
/// fields are present. The fractional component always prints exactly three
/// zero-padded digits. Field order follows the record's association list and
/// is not part of the contract.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.message
        )?;
        if !self.fields.is_empty() {
            let joined = self
                .fields
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " {{{joined}}}")?;
        }
        Ok(())
    }
}
