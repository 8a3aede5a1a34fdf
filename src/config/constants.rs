//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Sessions & Security
// =============================================================================

/// Name of the encrypted session cookie
pub const SESSION_COOKIE_NAME: &str = "alumnet_session";

/// Minimum session secret length (cookie key derivation requirement)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

// =============================================================================
// User Roles
// =============================================================================

/// Role token for students (the requesting side)
pub const ROLE_STUDENT: &str = "student";

/// Role token for alumni (the mentoring side)
pub const ROLE_ALUMNI: &str = "alumni";

// =============================================================================
// Request Status
// =============================================================================

/// Initial status of every mentorship request
pub const STATUS_PENDING: &str = "Pending";

/// Status after the addressed alumni accepts
pub const STATUS_ACCEPTED: &str = "Accepted";

/// Status after the addressed alumni rejects
pub const STATUS_REJECTED: &str = "Rejected";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file created on demand)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://alumnet.db?mode=rwc";

// =============================================================================
// Templates
// =============================================================================

/// Default directory holding the handlebars templates
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Display format for request timestamps (second granularity)
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
