mod debug_report;

use polytonic::{ExtendedLetters, Options, Representation, convert, convert_verbose};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.verbose {
        let res = convert_verbose(&config.input, config.from, config.to, &config.options);
        debug_report::print_run(&res, config.color);
    } else {
        println!("{}", convert(&config.input, config.from, config.to, &config.options));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("POLYTONIC_LOG").unwrap_or_else(|_| EnvFilter::new("polytonic=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

struct CliConfig {
    input: String,
    from: Representation,
    to: Representation,
    options: Options,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut from: Option<Representation> = None;
    let mut to: Option<Representation> = None;
    let mut options = Options::default();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("polytonic {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--remove-diacritics" => options.remove_diacritics = true,
            "--preserve-whitespace" => options.preserve_whitespace = true,
            "--no-beta-variant" => options.disable_beta_variant = true,
            "--circumflex" => options.use_circumflex_for_long_vowels = true,
            "--chi-kh" => options.chi_as_kh = true,
            "--xi-ks" => options.xi_as_ks = true,
            "-f" | "--from" => {
                let value = args.next().ok_or_else(|| "error: --from expects a value".to_string())?;
                from = Some(parse_representation(&value)?);
            }
            "-t" | "--to" => {
                let value = args.next().ok_or_else(|| "error: --to expects a value".to_string())?;
                to = Some(parse_representation(&value)?);
            }
            "--extended" => {
                let value = args.next().ok_or_else(|| "error: --extended expects a value".to_string())?;
                options.extended_letters |= parse_extended(&value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--from=") => from = Some(parse_representation(arg.trim_start_matches("--from="))?),
            _ if arg.starts_with("--to=") => to = Some(parse_representation(arg.trim_start_matches("--to="))?),
            _ if arg.starts_with("--extended=") => {
                options.extended_letters |= parse_extended(arg.trim_start_matches("--extended="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let from = from.ok_or_else(|| format!("error: --from is required\n\n{}", help_text()))?;
    let to = to.ok_or_else(|| format!("error: --to is required\n\n{}", help_text()))?;

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, from, to, options, verbose, color })
}

fn parse_representation(value: &str) -> Result<Representation, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn parse_extended(value: &str) -> Result<ExtendedLetters, String> {
    value.parse().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "polytonic {version}

Convert Ancient Greek between Greek script, Beta Code and transliteration.

Usage:
  polytonic --from <repr> --to <repr> [OPTIONS] [--] <text...>
  echo 'a)/nqrwpos' | polytonic -f beta -t greek

Representations:
  greek (gr, grc), beta-code (beta, bc), transliteration (translit, tr)

Options:
  -f, --from <repr>          Representation of the input.
  -t, --to <repr>            Representation of the output.
  --remove-diacritics        Drop accents, breathings and other diacritics.
  --preserve-whitespace      Keep whitespace as given (default collapses runs).
  --extended <letter>        Enable an archaic letter: digamma, yot,
                             lunate-sigma, stigma, koppa, sampi or all.
                             May be repeated.
  --no-beta-variant          Never write cursive beta (ϐ) inside words.
  --circumflex               Transliterate η/ω as ê/ô instead of ē/ō.
  --chi-kh                   Transliterate χ as kh instead of ch.
  --xi-ks                    Transliterate ξ as ks instead of x.
  -v, --verbose              Print a per-stage report instead of the output.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  POLYTONIC_LOG              Log filter (default: polytonic=warn).

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
