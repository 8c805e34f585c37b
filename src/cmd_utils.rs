/// Printed instead of combining when the output path or every input path is missing.
pub const NOT_ENOUGH_ARGUMENTS: &str = "Not enough arguments passed. Expected at least 2 more arguments (one for output path and at least one input path)";

/// Suffix to append to "file" for the given count.
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
