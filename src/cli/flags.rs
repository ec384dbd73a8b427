#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    /// Already validated against the 1-16 range.
    pub length: Option<i32>,
    pub number: Option<usize>,
}
