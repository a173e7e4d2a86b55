//! Application-wide constants and default values
//!
//! Centralized location for the numbers the pin widgets are tuned with

/// Component editor defaults
pub mod component {
    /// Drag/spin step of a single scalar control
    pub const FLOAT_SINGLE_STEP: f64 = 0.01;

    /// Decimal places shown and kept by a scalar control
    pub const FLOAT_DECIMALS: usize = 5;
}

/// Layout of composite widgets
pub mod layout {
    /// Margin around a composite widget, in points
    pub const CONTENTS_MARGIN: f32 = 1.0;

    /// Spacing between component controls, in points
    pub const SPACING: f32 = 1.0;
}

/// Demo application constants
pub mod demo {
    /// Initial window size
    pub const WINDOW_SIZE: [f32; 2] = [720.0, 560.0];

    /// Number of data-setter calls kept in the event log
    pub const MAX_LOG_ENTRIES: usize = 200;

    /// Range used when pushing random values into the editors
    pub const RANDOM_RANGE: f64 = 10.0;
}
