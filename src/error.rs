//! Error types for Raksha

/// Result type alias
pub type Result<T> = std::result::Result<T, RestraintError>;

/// Construction errors for the geometric value types.
///
/// Queries never fail; only constructors validate their inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestraintError {
    /// A coordinate component was NaN or infinite
    #[error("Non-finite point: {x}; {y}")]
    NonFinitePoint {
        /// X component as supplied
        x: f32,
        /// Y component as supplied
        y: f32,
    },

    /// A derived footprint offset was NaN or infinite
    #[error("Non-finite footprint: {front}, {back}; {half_width}")]
    NonFiniteFootprint {
        /// Derived front offset
        front: f32,
        /// Derived back offset
        back: f32,
        /// Derived half width
        half_width: f32,
    },

    /// Line coefficients were non-finite or both direction terms zero
    #[error("Ill-constructed line: {m}; {a}, {b}")]
    IllFormedLine {
        /// Distance term
        m: f32,
        /// X coefficient
        a: f32,
        /// Y coefficient
        b: f32,
    },

    /// Scan ranges and bearings were not paired one to one
    #[error("Scan length mismatch: {ranges} ranges; {angles} angles")]
    ScanLengthMismatch {
        /// Number of ranges supplied
        ranges: usize,
        /// Number of bearings supplied
        angles: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RestraintError::NonFinitePoint {
            x: f32::NAN,
            y: 0.0,
        };
        assert_eq!(err.to_string(), "Non-finite point: NaN; 0");

        let err = RestraintError::IllFormedLine {
            m: 1.0,
            a: 0.0,
            b: 0.0,
        };
        assert_eq!(err.to_string(), "Ill-constructed line: 1; 0, 0");

        let err = RestraintError::ScanLengthMismatch {
            ranges: 3,
            angles: 2,
        };
        assert_eq!(err.to_string(), "Scan length mismatch: 3 ranges; 2 angles");
    }
}
