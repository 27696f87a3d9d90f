/// Student identifiers are opaque strings issued outside this system.
pub type StudentId = String;

/// Course identifiers are unique within a single elective catalog.
pub type CourseId = String;

/// Stored grades and required grades share one numeric type so comparisons
/// never mix representations.
pub type Grade = f64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
