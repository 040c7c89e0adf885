use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reweigh::generate::{self, RandomGraphOptions};
use reweigh::graphlib::{EdgeKey, alg};
use reweigh::{
    GraphInput, Potentials, RoundingOptions, RoundingStatus, ShiftSource, WeightedGraph, reduced,
    validate,
};
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Reweigh(reweigh::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Reweigh(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reweigh::Error> for CliError {
    fn from(value: reweigh::Error) -> Self {
        Self::Reweigh(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Reweigh(err) if err.is_negative_cycle() => 3,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Round,
    Shift,
    Paths,
    Check,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GenerateKind {
    Simple,
    Bigger,
    Layered,
    Ring,
    Random,
    Grid,
}

impl FromStr for GenerateKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "bigger" => Ok(Self::Bigger),
            "layered" => Ok(Self::Layered),
            "ring" => Ok(Self::Ring),
            "random" => Ok(Self::Random),
            "grid" => Ok(Self::Grid),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    max_iters: Option<usize>,
    stall_limit: Option<usize>,
    source: Option<String>,
    log_level: Option<String>,
    kind: Option<GenerateKind>,
    nodes: Option<usize>,
    prob: Option<f64>,
    min_weight: Option<i64>,
    max_weight: Option<i64>,
    rows: Option<usize>,
    cols: Option<usize>,
    seed: Option<u64>,
    allow_negative_cycles: bool,
}

fn usage() -> &'static str {
    "reweigh\n\
\n\
USAGE:\n\
  reweigh [round] [--config <file>] [--max-iters <n>] [--stall-limit <n>] [--pretty] [<path>|-]\n\
  reweigh shift [--source <node>] [--pretty] [<path>|-]\n\
  reweigh paths --source <node> [--pretty] [<path>|-]\n\
  reweigh check [--pretty] [<path>|-]\n\
  reweigh generate simple|bigger|layered|ring|random|grid [--nodes <n>] [--prob <p>] [--min <w>] [--max <w>] [--rows <r>] [--cols <c>] [--seed <s>] [--allow-negative-cycles] [--pretty]\n\
\n\
OPTIONS:\n\
  --log-level <filter>   tracing filter (defaults to RUST_LOG, then `warn`)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the graph JSON is read from stdin.\n\
  - Input: {\"nodes\": [...], \"edges\": [{\"from\", \"to\", \"weight\"}], \"potentials\": {...}}.\n\
    Without `potentials`, rounding starts from all zeros.\n\
  - Exit codes: 0 success, 1 error, 2 usage, 3 negative cycle.\n\
"
}

fn value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parsed<'a, T: FromStr>(it: &mut impl Iterator<Item = &'a String>) -> Result<T, CliError> {
    value(it)?.parse::<T>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "round" => args.command = Command::Round,
            "shift" => args.command = Command::Shift,
            "paths" => args.command = Command::Paths,
            "check" => args.command = Command::Check,
            "generate" => args.command = Command::Generate,
            "--pretty" => args.pretty = true,
            "--allow-negative-cycles" => args.allow_negative_cycles = true,
            "--config" => args.config = Some(value(&mut it)?.clone()),
            "--source" => args.source = Some(value(&mut it)?.clone()),
            "--log-level" => args.log_level = Some(value(&mut it)?.clone()),
            "--max-iters" => args.max_iters = Some(parsed(&mut it)?),
            "--stall-limit" => args.stall_limit = Some(parsed(&mut it)?),
            "--nodes" => args.nodes = Some(parsed(&mut it)?),
            "--prob" => args.prob = Some(parsed(&mut it)?),
            "--min" => args.min_weight = Some(parsed(&mut it)?),
            "--max" => args.max_weight = Some(parsed(&mut it)?),
            "--rows" => args.rows = Some(parsed(&mut it)?),
            "--cols" => args.cols = Some(parsed(&mut it)?),
            "--seed" => args.seed = Some(parsed(&mut it)?),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            kind if args.command == Command::Generate && args.kind.is_none() => {
                args.kind = Some(kind.parse().map_err(|_| CliError::Usage(usage()))?);
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    match args.command {
        Command::Generate if args.kind.is_none() || args.input.is_some() => {
            Err(CliError::Usage(usage()))
        }
        Command::Paths if args.source.is_none() => Err(CliError::Usage(usage())),
        _ => Ok(args),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn load_options(args: &Args) -> Result<RoundingOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => RoundingOptions::default(),
    };
    if let Some(n) = args.max_iters {
        options.max_iterations = n;
    }
    if let Some(n) = args.stall_limit {
        options.stall_limit = Some(n);
    }
    Ok(options)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeOut<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
    reduced_length: f64,
}

fn edges_out<'a>(g: &WeightedGraph, lens: &'a [(EdgeKey, f64)]) -> Vec<EdgeOut<'a>> {
    lens.iter()
        .map(|(key, len)| EdgeOut {
            from: &key.v,
            to: &key.w,
            weight: g.edge_by_key(key).copied().unwrap_or_default(),
            reduced_length: *len,
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundOut<'a> {
    status: RoundingStatus,
    iterations: usize,
    decrements: usize,
    potentials: &'a Potentials,
    violations: Vec<EdgeOut<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOut<'a> {
    feasible: bool,
    reduced_lengths: Vec<EdgeOut<'a>>,
    violations: Vec<EdgeOut<'a>>,
}

#[derive(Serialize)]
struct PathOut {
    distance: Option<f64>,
    predecessor: Option<String>,
    path: Option<Vec<String>>,
}

fn load_graph(args: &Args) -> Result<(GraphInput, WeightedGraph), CliError> {
    let text = read_input(args.input.as_deref())?;
    let input = GraphInput::from_json(&text)?;
    let g = input.build()?;
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "loaded graph"
    );
    Ok((input, g))
}

fn generate_graph(args: &Args) -> Result<WeightedGraph, CliError> {
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or(0));
    let g = match args.kind.ok_or(CliError::Usage(usage()))? {
        GenerateKind::Simple => generate::simple_graph(),
        GenerateKind::Bigger => generate::bigger_toy_graph(),
        GenerateKind::Layered => generate::layered_toy_graph(),
        GenerateKind::Ring => generate::negative_ring(args.nodes.unwrap_or(5)),
        GenerateKind::Random => {
            let defaults = RandomGraphOptions::default();
            let opts = RandomGraphOptions {
                nodes: args.nodes.unwrap_or(defaults.nodes),
                edge_probability: args.prob.unwrap_or(defaults.edge_probability),
                min_weight: args.min_weight.unwrap_or(defaults.min_weight),
                max_weight: args.max_weight.unwrap_or(defaults.max_weight),
                allow_negative_cycles: args.allow_negative_cycles,
            };
            generate::random_graph(&opts, &mut rng)?
        }
        GenerateKind::Grid => generate::grid_graph(
            args.rows.unwrap_or(10),
            args.cols.unwrap_or(10),
            args.min_weight.unwrap_or(1)..=args.max_weight.unwrap_or(10),
            &mut rng,
        )?,
    };
    Ok(g)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Generate => {
            let g = generate_graph(&args)?;
            write_json(&GraphInput::from_graph(&g, None), args.pretty)
        }
        Command::Round => {
            let options = load_options(&args)?;
            let (input, g) = load_graph(&args)?;
            let initial = input.initial_potentials(&g);
            let rounding = reweigh::round_potentials(&g, &initial, &options)?;
            let violations = reduced::violations(&g, &rounding.potentials)?;
            write_json(
                &RoundOut {
                    status: rounding.status,
                    iterations: rounding.iterations,
                    decrements: rounding.decrements,
                    potentials: &rounding.potentials,
                    violations: edges_out(&g, &violations),
                },
                args.pretty,
            )
        }
        Command::Shift => {
            let (input, g) = load_graph(&args)?;
            let initial = input.initial_potentials(&g);
            let source = match &args.source {
                Some(node) => ShiftSource::Node(node.clone()),
                None => ShiftSource::Virtual,
            };
            let shifted = reweigh::shift_potentials(&g, &initial, source)?;
            write_json(&shifted, args.pretty)
        }
        Command::Paths => {
            let (_, g) = load_graph(&args)?;
            let source = args.source.as_deref().ok_or(CliError::Usage(usage()))?;
            let paths =
                alg::bellman_ford(&g, source, |_, &w| w).map_err(reweigh::Error::from)?;

            let mut out: IndexMap<&str, PathOut> = IndexMap::new();
            for node in g.nodes() {
                let entry = paths.get(node);
                out.insert(
                    node,
                    PathOut {
                        distance: entry.map(|e| e.distance).filter(|d| d.is_finite()),
                        predecessor: entry.and_then(|e| e.predecessor.clone()),
                        path: alg::path_to(&paths, node),
                    },
                );
            }
            write_json(&out, args.pretty)
        }
        Command::Check => {
            let (input, g) = load_graph(&args)?;
            let y = input.initial_potentials(&g);
            validate::check_potentials(&g, &y)?;
            let lens = reduced::reduced_lengths(&g, &y)?;
            let violations: Vec<(EdgeKey, f64)> =
                lens.iter().filter(|(_, len)| *len < 0.0).cloned().collect();
            write_json(
                &CheckOut {
                    feasible: violations.is_empty(),
                    reduced_lengths: edges_out(&g, &lens),
                    violations: edges_out(&g, &violations),
                },
                args.pretty,
            )
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };
    init_tracing(args.log_level.as_deref());

    if let Err(err) = run(args) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
