use anyhow::Context;
use city_roster::config::source::source_for;
use city_roster::core::ConfigProvider;
use city_roster::utils::{logger, validation::Validate};
use city_roster::{CityCatalog, CityError, CliConfig, TomlConfig};
use clap::Parser;
use std::io::{self, Write};

fn main() {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if let Err(e) = run(&mut config) {
        let code = report_error(&mut io::stderr().lock(), &e);
        std::process::exit(code);
    }
}

/// Prints the error once for the user and returns the exit code. The full
/// chain only goes to the debug log.
fn report_error<W: Write>(err_out: &mut W, e: &anyhow::Error) -> i32 {
    tracing::debug!("Error details: {:#}", e);
    let (message, code) = match e.downcast_ref::<CityError>() {
        Some(city_error) => (
            format!(
                "❌ {}\n💡 {}",
                city_error.user_friendly_message(),
                city_error.recovery_suggestion()
            ),
            city_error.exit_code(),
        ),
        None => (format!("❌ {:#}", e), 1),
    };
    let _ = writeln!(err_out, "{}", message);
    code
}

fn run(config: &mut CliConfig) -> anyhow::Result<()> {
    // 載入 TOML 配置 (命令列參數優先)
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path.display());
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("loading config file {}", path.display()))?;
        file.validate()?;
        config.merge_toml(&file);
    }

    config.validate()?;
    tracing::debug!("CLI config: {:?}", config);

    let source = source_for(config.data_path());
    let catalog = CityCatalog::load(source.as_ref())?;
    if catalog.is_empty() {
        tracing::warn!("No cities found in {}", source.describe());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = if config.list_states {
        write_state_choices(&mut out, &catalog)
    } else {
        let listing = catalog.render_as(&config.view_state(), config.output_format())?;
        write_listing(&mut out, &listing)
    };

    ignore_broken_pipe(written).context("writing to stdout")
}

fn write_state_choices<W: Write>(out: &mut W, catalog: &CityCatalog) -> io::Result<()> {
    for (code, count) in catalog.state_choices() {
        let count = count.map_or_else(|| "-".to_string(), |n| n.to_string());
        writeln!(out, "{:<4}{:>5}", code, count)?;
    }
    out.flush()
}

fn write_listing<W: Write>(out: &mut W, listing: &str) -> io::Result<()> {
    if !listing.is_empty() {
        writeln!(out, "{}", listing.trim_end_matches('\n'))?;
    }
    out.flush()
}

/// A reader that went away (`| head`) is a normal end of output.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_roster::{CityRecord, SortKey, ViewState};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn catalog() -> CityCatalog {
        CityCatalog::new(vec![
            CityRecord::new("Troy", "NY", 49_946),
            CityRecord::new("San Juan", "PR", 342_259),
        ])
    }

    #[test]
    fn test_state_choices_output() {
        let mut out = Vec::new();
        write_state_choices(&mut out, &catalog()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 53);
        assert_eq!(lines[0], "All     2");
        assert!(lines.contains(&"NY      1"));
        assert!(lines.contains(&"VT      -"));
        assert_eq!(lines[52], "PR      1");
    }

    #[test]
    fn test_listing_output_ends_with_one_newline() {
        let mut out = Vec::new();
        let listing = catalog().render(&ViewState::new("NY", SortKey::ByName));
        write_listing(&mut out, &listing).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Troy                         | NY |     49,946\n"
        );

        let mut out = Vec::new();
        write_listing(&mut out, "").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_is_reported_once() {
        let err = anyhow::Error::new(CityError::Parse {
            line: 3,
            content: "Troy, NY".to_string(),
            reason: "expected 3 fields".to_string(),
        })
        .context("loading city data");
        let mut out = Vec::new();
        let code = report_error(&mut out, &err);
        let text = String::from_utf8(out).unwrap();

        assert_eq!(code, 1);
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.matches("line 3").count(), 1);

        let mut out = Vec::new();
        let code = report_error(&mut out, &anyhow::anyhow!("something else"));
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "❌ something else\n");
    }

    #[test]
    fn test_broken_pipe_is_a_clean_exit() {
        let listing = catalog().render(&ViewState::default());
        let result = write_listing(&mut ClosedPipe, &listing);
        assert_eq!(result.as_ref().map_err(|e| e.kind()), Err(io::ErrorKind::BrokenPipe));
        assert!(ignore_broken_pipe(result).is_ok());

        assert!(ignore_broken_pipe(write_state_choices(&mut ClosedPipe, &catalog())).is_ok());

        let other = Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(ignore_broken_pipe(other).is_err());
    }
}
