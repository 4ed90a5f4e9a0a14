//! Shared numeric constants for the planner core.

// ── Canvas frame ────────────────────────────────────────────────

/// Width of the reference canvas frame, in canvas units.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Height of the reference canvas frame, in canvas units.
pub const CANVAS_HEIGHT: f64 = 600.0;

// ── Instance scaling ────────────────────────────────────────────

/// Smallest allowed instance scale factor.
pub const MIN_SCALE: f64 = 0.3;

/// Largest allowed instance scale factor.
pub const MAX_SCALE: f64 = 2.0;

/// Scale change applied per grow/shrink step.
pub const SCALE_STEP: f64 = 0.1;

// ── Background upload ───────────────────────────────────────────

/// Upload ceiling for user-supplied background images (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Minimum width of an uploaded background image, in pixels.
pub const MIN_BACKGROUND_WIDTH: u32 = 800;

/// Minimum height of an uploaded background image, in pixels.
pub const MIN_BACKGROUND_HEIGHT: u32 = 600;
