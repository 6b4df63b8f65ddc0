//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Sequence sizes
pub const FIELD_BASE_LEN: &str = "base_len";
pub const FIELD_TARGET_LEN: &str = "target_len";

// Derived artifact sizes
pub const FIELD_BLOCK_COUNT: &str = "block_count";
pub const FIELD_OPCODE_COUNT: &str = "opcode_count";
pub const FIELD_GROUP_COUNT: &str = "group_count";
pub const FIELD_INDEXED_COUNT: &str = "indexed_count";
pub const FIELD_POPULAR_COUNT: &str = "popular_count";
pub const FIELD_JUNK_COUNT: &str = "junk_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
