//! `utf8gen` – encode a range of code points and write them to a file.
//!
//! ```bash
//! utf8gen 0xC0 0xD6 sample.txt
//! ```

use std::{io::Write, ops::RangeInclusive, path::PathBuf, str::FromStr};

use anyhow::{Context, bail, ensure};
use clap::Parser;
use log::info;
use utf8codec::{EncodingUnit, WriteMode, WriterOptions, encode, read, write_with};

#[derive(Parser, Debug)]
#[command(name = "utf8gen")]
#[command(version, about = "Writes a range of Unicode code points to a file as UTF-8", long_about = None)]
struct Cli {
    /// Lowest code point, in hexadecimal (e.g. 0xC0)
    #[arg(value_parser = parse_hex)]
    low: u32,
    /// Highest code point, in hexadecimal (e.g. 0xD6)
    #[arg(value_parser = parse_hex)]
    high: u32,
    /// Destination file; replaced if it exists
    output: PathBuf,
    /// Write each unit as it is validated instead of all at once
    #[arg(long)]
    streaming: bool,
    /// Read the file back and check it decodes to the requested range
    #[arg(long)]
    verify: bool,
    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "INFO")]
    log_level: String,
}

/// Parses a hexadecimal number with or without a `0x` prefix.
fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).map_err(|err| format!("`{s}` is not a hexadecimal number: {err}"))
}

fn encode_range(range: RangeInclusive<u32>) -> Vec<EncodingUnit> {
    range.map(encode).collect()
}

fn verify(cli: &Cli) -> anyhow::Result<()> {
    let decoded = read(&cli.output)
        .with_context(|| format!("failed to read back {}", cli.output.display()))?;
    let expected = (cli.low..=cli.high).chain(std::iter::once(0x0A));
    if !decoded.iter().map(|&c| u32::from(c)).eq(expected) {
        bail!(
            "{} does not decode to U+{:04X}..=U+{:04X} plus a line feed",
            cli.output.display(),
            cli.low,
            cli.high
        );
    }
    info!("verified {} code points", decoded.len());
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    ensure!(
        cli.low <= cli.high,
        "low bound {:#X} is above high bound {:#X}",
        cli.low,
        cli.high
    );

    let units = encode_range(cli.low..=cli.high);
    let options = WriterOptions {
        mode: if cli.streaming {
            WriteMode::Streaming
        } else {
            WriteMode::Buffered
        },
    };
    write_with(&cli.output, &units, &options)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("wrote {} code points to {}", units.len(), cli.output.display());

    if cli.verify {
        verify(cli)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_level = log::LevelFilter::from_str(&cli.log_level)?;
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .filter(None, log_level)
        .init();

    run(&cli)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cli(low: u32, high: u32, output: PathBuf) -> Cli {
        Cli {
            low,
            high,
            output,
            streaming: false,
            verify: true,
            log_level: "INFO".into(),
        }
    }

    #[rstest]
    #[case("0xC0", Ok(0xC0))]
    #[case("0XD6", Ok(0xD6))]
    #[case("10FFFF", Ok(0x10_FFFF))]
    #[case("1f600", Ok(0x1_F600))]
    fn parses_hex(#[case] input: &str, #[case] expected: Result<u32, String>) {
        assert_eq!(parse_hex(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0x")]
    #[case("xyz")]
    #[case("-1")]
    #[case("100000000")]
    fn rejects_non_hex(#[case] input: &str) {
        assert!(parse_hex(input).is_err());
    }

    #[test]
    fn cli_accepts_three_positionals() {
        let cli = Cli::try_parse_from(["utf8gen", "0xC0", "0xD6", "sample.txt", "--verify"]).unwrap();
        assert_eq!((cli.low, cli.high), (0xC0, 0xD6));
        assert_eq!(cli.output, PathBuf::from("sample.txt"));
        assert!(cli.verify);
        assert!(!cli.streaming);
        assert_eq!(cli.log_level, "INFO");
        assert!(Cli::try_parse_from(["utf8gen", "0xC0", "0xD6"]).is_err());
    }

    #[test]
    fn writes_and_verifies_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        run(&cli(0xC0, 0xD6, path.clone())).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ\n");
    }

    #[test]
    fn range_through_surrogates_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surrogates.txt");
        assert!(run(&cli(0xD7FF, 0xD800, path.clone())).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn inverted_range_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&cli(0x42, 0x41, dir.path().join("x.txt"))).is_err());
    }
}
