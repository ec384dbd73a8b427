//! Password generation core.

pub mod charset;
mod config;
mod generate;

pub use config::GenerationConfig;
pub use generate::{generate, generate_batch, generate_joined};

/// Flat entry point: build a config from loose arguments and generate.
pub fn generate_password(
    length: i32,
    include_uppercase: bool,
    include_lowercase: bool,
    include_numbers: bool,
    include_symbols: bool,
) -> String {
    generate(&GenerationConfig {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_call_matches_config() {
        let pass = generate_password(16, false, true, false, false);
        assert_eq!(pass.len(), 16);
        assert!(pass.bytes().all(|b| b.is_ascii_lowercase()));
        assert_eq!(generate_password(0, true, true, true, true), "");
    }
}
