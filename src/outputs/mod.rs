//! Output generation for the JSON artifacts.
//!
//! # Output Structure
//!
//! ```text
//! content/
//! ├── scam-of-the-week.json   # WeeklyPayload, always overwritten ("latest")
//! └── 2024-W37.json           # bare ScamItem, per-week archive/rollback copy
//! ```

pub mod json;
