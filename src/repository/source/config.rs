/// Settings for reading admin trip sheets.
pub struct Config {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Leading and trailing whitespace is removed from every field.
    pub trim: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            trim: true,
        }
    }
}
