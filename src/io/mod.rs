//! I/O layer for the alert file handed over by the monitoring daemon.
//! The relay only ever reads; nothing is written back to disk.
pub mod alert;
pub use alert::read_alert_file;
