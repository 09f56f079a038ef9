//! Draw from a categorical distribution and print per-category counts.
//!
//! Examples:
//!   catdraw 0.1,0.2,0.3,0.4
//!   catdraw --engine mt --seed 42 --draws 100000 1,1,2
//!   catdraw --engine lcg --lcg 2147483647,16807,0 --seed 1 1,1,2
//!   catdraw --config sampler.json 0.5,0.5
//!   echo "0.2, 0.8" | catdraw --engine xorshift
//!
//! With no probability list on the command line, one comma-separated line is
//! read from stdin. Set `RUST_LOG=catdraw=debug` for engine/seed logging.

use std::io::{self, BufRead, Write};
use std::process;

use catdraw::{
    chi_square_critical_001, tally, Categorical, EngineKind, Histogram, LcgParams,
    SamplerConfig,
};
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!("Usage: catdraw [options] [p0,p1,...]\n");
    eprintln!("Options:");
    eprintln!("  --engine <default|xorshift|mt|lcg>  Generator engine (default: default)");
    eprintln!("  --seed <u64>                        Seed (default: system clock)");
    eprintln!("  --draws <n>                         Number of draws (default: 10000)");
    eprintln!("  --lcg <m,a,c>                       LCG modulus, multiplier, increment");
    eprintln!("  --config <file.json>                Load a SamplerConfig; flags override it");
    eprintln!("  -h, --help                          Show this help");
    process::exit(1);
}

fn fail(msg: &str) -> ! {
    eprintln!("catdraw: {msg}");
    process::exit(1);
}

#[derive(Debug)]
struct Args {
    cfg: SamplerConfig,
    probabilities: Option<String>,
}

#[derive(Debug)]
enum Command {
    Help,
    Run(Args),
}

fn take_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_lcg(s: &str) -> Result<LcgParams, String> {
    const EXPECTED: &str = "--lcg expects three unsigned integers m,a,c";
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| EXPECTED.to_string())?;
    match parts.as_slice() {
        &[modulus, multiplier, increment] => Ok(LcgParams {
            modulus,
            multiplier,
            increment,
        }),
        _ => Err(EXPECTED.to_string()),
    }
}

fn load_config(path: &str) -> Result<SamplerConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("bad config {path}: {e}"))
}

/// Parse the arguments after the program name. `load` reads a `--config` file.
fn parse_args(
    raw: Vec<String>,
    load: impl Fn(&str) -> Result<SamplerConfig, String>,
) -> Result<Command, String> {
    // The config file is the base layer; flags override it regardless of order.
    let mut cfg = SamplerConfig::default();
    if let Some(pos) = raw.iter().position(|a| a == "--config") {
        let path = raw.get(pos + 1).ok_or("--config needs a value")?;
        cfg = load(path.as_str())?;
    }

    let mut probabilities = None;
    let mut args = raw.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--config" => {
                take_value(&mut args, "--config")?;
            }
            "--engine" => {
                let v = take_value(&mut args, "--engine")?;
                cfg.engine = v.parse::<EngineKind>().map_err(|e| e.to_string())?;
            }
            "--seed" => {
                let v = take_value(&mut args, "--seed")?;
                cfg.seed = Some(v.parse().map_err(|_| "--seed must be a u64")?);
            }
            "--draws" => {
                let v = take_value(&mut args, "--draws")?;
                cfg.draws = v.parse().map_err(|_| "--draws must be a number")?;
            }
            "--lcg" => {
                let v = take_value(&mut args, "--lcg")?;
                cfg.lcg = parse_lcg(&v)?;
            }
            s if s.starts_with("--") => return Err(format!("unknown option {s}")),
            _ => {
                if probabilities.is_some() {
                    return Err("only one probability list may be given".to_string());
                }
                probabilities = Some(arg);
            }
        }
    }
    Ok(Command::Run(Args { cfg, probabilities }))
}

fn read_probabilities_line() -> String {
    eprintln!("Enter a comma-separated list of probabilities (e.g. 0.1, 0.2, 0.3, 0.4):");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .unwrap_or_else(|e| fail(&format!("cannot read stdin: {e}")));
    line
}

fn parse_probabilities(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<f64>().map_err(|_| format!("not a number: {p:?}"))
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let Args { cfg, probabilities } = match parse_args(raw, load_config) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => usage(),
        Err(msg) => fail(&msg),
    };
    let line = probabilities.unwrap_or_else(read_probabilities_line);
    let weights = parse_probabilities(&line).unwrap_or_else(|msg| fail(&msg));

    let dist = Categorical::new(&weights).unwrap_or_else(|e| fail(&e.to_string()));
    let mut engine = cfg.build_engine().unwrap_or_else(|e| fail(&e.to_string()));
    let hist = tally(&mut engine, &dist, cfg.draws);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = print_report(&mut out, engine.name(), &dist, &hist) {
        fail(&format!("write failed: {e}"));
    }
}

fn print_report(
    out: &mut impl Write,
    engine_name: &str,
    dist: &Categorical,
    hist: &Histogram,
) -> io::Result<()> {
    writeln!(out, "engine: {engine_name}  draws: {}", hist.total())?;
    writeln!(
        out,
        "{:>5}  {:>11}  {:>10}  {:>9}",
        "index", "probability", "count", "frequency"
    )?;
    let freqs = hist.frequencies();
    for (i, (&p, &c)) in dist.probabilities().iter().zip(hist.counts()).enumerate() {
        writeln!(out, "{i:>5}  {p:>11.6}  {c:>10}  {:>9.6}", freqs[i])?;
    }
    if let Ok(stat) = hist.chi_square(dist.probabilities()) {
        let df = dist
            .probabilities()
            .iter()
            .filter(|&&p| p > 0.0)
            .count()
            .saturating_sub(1);
        match chi_square_critical_001(df) {
            Some(crit) => writeln!(out, "chi-square: {stat:.4}  (df={df}, 0.1% critical {crit})")?,
            None => writeln!(out, "chi-square: {stat:.4}  (df={df})")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_config(path: &str) -> Result<SamplerConfig, String> {
        panic!("unexpected config load: {path}")
    }

    fn run(list: &[&str]) -> Args {
        match parse_args(args(list), no_config) {
            Ok(Command::Run(a)) => a,
            other => panic!("expected a run, got {other:?}"),
        }
    }

    #[test]
    fn lcg_takes_exactly_three_values() {
        assert_eq!(
            parse_lcg("2147483647, 16807 ,0").unwrap(),
            LcgParams::minstd()
        );
        for bad in ["1,2", "1,2,3,4", "1,x,3", "1,-2,3", ""] {
            assert!(parse_lcg(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn probability_list_trims_whitespace() {
        assert_eq!(
            parse_probabilities(" 0.2, 0.8\n").unwrap(),
            vec![0.2, 0.8]
        );
        assert_eq!(parse_probabilities("1").unwrap(), vec![1.0]);
        let err = parse_probabilities("0.5, half").unwrap_err();
        assert_eq!(err, "not a number: \"half\"");
        assert!(parse_probabilities("0.5,,0.5").is_err());
    }

    #[test]
    fn flags_without_config() {
        let a = run(&["--engine", "mt", "--seed", "42", "--draws", "100", "1,1,2"]);
        assert_eq!(a.cfg.engine, EngineKind::MersenneTwister);
        assert_eq!(a.cfg.seed, Some(42));
        assert_eq!(a.cfg.draws, 100);
        assert_eq!(a.cfg.lcg, LcgParams::glibc());
        assert_eq!(a.probabilities.as_deref(), Some("1,1,2"));

        let a = run(&["--engine", "lcg", "--lcg", "4294967296,1664525,1013904223"]);
        assert_eq!(a.cfg.lcg, LcgParams::numerical_recipes());
        assert_eq!(a.probabilities, None);
    }

    #[test]
    fn flags_override_config_in_any_order() {
        let load = |path: &str| {
            assert_eq!(path, "sampler.json");
            Ok::<_, String>(SamplerConfig {
                engine: EngineKind::XorShift,
                seed: Some(7),
                draws: 500,
                lcg: LcgParams::minstd(),
            })
        };
        for list in [
            ["--seed", "9", "--config", "sampler.json"],
            ["--config", "sampler.json", "--seed", "9"],
        ] {
            let Ok(Command::Run(a)) = parse_args(args(&list), load) else {
                panic!("{list:?}");
            };
            assert_eq!(a.cfg.seed, Some(9), "{list:?}");
            assert_eq!(a.cfg.engine, EngineKind::XorShift);
            assert_eq!(a.cfg.draws, 500);
            assert_eq!(a.cfg.lcg, LcgParams::minstd());
        }
    }

    #[test]
    fn config_errors_surface() {
        let load = |_: &str| Err::<SamplerConfig, _>("bad config x.json".to_string());
        let err = parse_args(args(&["--config", "x.json"]), load).unwrap_err();
        assert_eq!(err, "bad config x.json");
        assert!(parse_args(args(&["--config"]), no_config).is_err());
    }

    #[test]
    fn rejects_bad_arguments() {
        for list in [
            &["--seed"][..],
            &["--seed", "-1"],
            &["--draws", "many"],
            &["--engine", "quantum"],
            &["--lcg", "1,2"],
            &["--verbose"],
            &["0.5,0.5", "0.1,0.9"],
        ] {
            assert!(parse_args(args(list), no_config).is_err(), "{list:?}");
        }
        assert!(matches!(
            parse_args(args(&["--seed", "1", "-h"]), no_config),
            Ok(Command::Help)
        ));
    }

    #[test]
    fn report_table_and_chi_square() {
        let dist = Categorical::new(&[1.0, 1.0, 2.0, 0.0]).unwrap();
        let mut hist = Histogram::new(4);
        for i in [0, 1, 2, 2] {
            hist.record(i).unwrap();
        }
        let mut out = Vec::new();
        print_report(&mut out, "mt19937", &dist, &hist).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "engine: mt19937  draws: 4",
                "index  probability       count  frequency",
                "    0     0.250000           1   0.250000",
                "    1     0.250000           1   0.250000",
                "    2     0.500000           2   0.500000",
                "    3     0.000000           0   0.000000",
                // The zero-probability category does not count toward df.
                "chi-square: 0.0000  (df=2, 0.1% critical 13.816)",
            ]
        );
    }

    #[test]
    fn report_without_draws_has_no_chi_square() {
        let dist = Categorical::new(&[1.0]).unwrap();
        let mut out = Vec::new();
        print_report(&mut out, "lcg", &dist, &Histogram::new(1)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("chi-square"));
    }

    #[test]
    fn report_past_the_critical_table_omits_it() {
        let dist = Categorical::new(&[1.0; 12]).unwrap();
        let mut hist = Histogram::new(12);
        for i in 0..12 {
            hist.record(i).unwrap();
        }
        let mut out = Vec::new();
        print_report(&mut out, "StdRng", &dist, &hist).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("(df=11)\n"), "{text}");
    }
}
