use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for location ids taken from request paths
    /// Positive decimal integer, no sign or leading zero, at most 9 digits (fits in i32)
    /// - Valid: "1", "42", "999999999"
    /// - Invalid: "0", "007", "-3", "+3", "3a", " 3", "1234567890"
    pub static ref LOCATION_ID_REGEX: Regex = Regex::new(r"^[1-9][0-9]{0,8}$").unwrap();
}
