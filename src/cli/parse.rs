use super::CliFlags;
use crate::error::ParseError;
use crate::validate;

/// Upper bound for `-n`.
pub const MAX_COUNT: usize = 100_000;

/// Parse `args` (program name first) into flags. Lengths are checked here so
/// an out-of-range `-l` never reaches generation.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            flag @ ("-l" | "--length") => {
                let value = value_for(args, &mut i, flag)?;
                flags.length = Some(validate::parse_length(value)?);
            }
            flag @ ("-n" | "--number") => {
                let value = value_for(args, &mut i, flag)?;
                let count: usize = value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.to_string()))?;
                if count > MAX_COUNT {
                    return Err(ParseError::CountTooLarge(count, MAX_COUNT));
                }
                flags.number = Some(count);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LengthError;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn full_set() {
        let flags = parse(&args(&[
            "-l", "12", "-n", "3", "--no-upper", "--no-symbols", "-b", "-q", "--save",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(12));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_upper && flags.no_symbols && !flags.no_numbers && !flags.no_lower);
        assert!(flags.clipboard && flags.quiet && flags.save);
    }

    #[test]
    fn length_is_range_checked() {
        assert_eq!(
            parse(&args(&["-l", "17"])),
            Err(ParseError::Length(LengthError::OutOfRange(17)))
        );
        assert_eq!(
            parse(&args(&["--length", "0"])),
            Err(ParseError::Length(LengthError::OutOfRange(0)))
        );
        assert!(matches!(
            parse(&args(&["-l", "ten"])),
            Err(ParseError::Length(LengthError::NotANumber(_)))
        ));
        assert_eq!(parse(&args(&["-l", "16"])).unwrap().length, Some(16));
    }

    #[test]
    fn length_error_message_is_the_prompt() {
        let err = parse(&args(&["-l", "99"])).unwrap_err();
        assert_eq!(err.to_string(), validate::LENGTH_PROMPT);
    }

    #[test]
    fn bad_count_and_missing_values() {
        assert_eq!(
            parse(&args(&["-n", "many"])),
            Err(ParseError::InvalidNumber("many".into()))
        );
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
        assert_eq!(
            parse(&args(&["--number"])),
            Err(ParseError::MissingValue("--number".into()))
        );
    }

    #[test]
    fn count_is_capped() {
        assert_eq!(parse(&args(&["-n", "100000"])).unwrap().number, Some(MAX_COUNT));
        assert_eq!(
            parse(&args(&["-n", "100001"])),
            Err(ParseError::CountTooLarge(100_001, MAX_COUNT))
        );
        let huge = (usize::MAX / 4).to_string();
        assert!(matches!(
            parse(&args(&["-b", "-n", &huge])),
            Err(ParseError::CountTooLarge(..))
        ));
    }

    #[test]
    fn unknown_arg() {
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }
}
