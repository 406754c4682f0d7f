#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub length: Option<usize>,
}
