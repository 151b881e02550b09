//! Classification audit logging
//!
//! Optional append-only log of every classification decision. Evidence
//! values are SHA-256 hashed before writing; the audit trail must never
//! contain plaintext PII.

pub mod logger;

pub use logger::{AuditConfig, AuditLogger};
