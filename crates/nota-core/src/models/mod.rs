//! Data models: supplier registry, invoice drafts, scanner configuration.

pub mod config;
pub mod invoice;
pub mod supplier;

pub use config::{ScanConfig, ScoreWeights, ScoreWeightsPatch};
pub use invoice::{InvoiceDraft, ItemDraft, PaymentMethod, PaymentStatus};
pub use supplier::{PaymentTerms, PpnHandling, Supplier};
