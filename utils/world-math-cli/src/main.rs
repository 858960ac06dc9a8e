use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use world_math::{Axis, RoundingMode, Side, Vector3};

#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
struct Args {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Distances between two positions
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
    },
    /// Neighbour of a position towards a side
    Side {
        #[arg(allow_hyphen_values = true)]
        position: Vector3,
        #[arg(value_enum)]
        side: SideArg,
        #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
        step: i32,
    },
    /// Side code opposite the given one
    Opposite {
        #[arg(allow_hyphen_values = true)]
        code: i32,
    },
    /// Point on the segment from A to B where an axis reaches a value
    Intersect {
        #[arg(allow_hyphen_values = true)]
        a: Vector3,
        #[arg(allow_hyphen_values = true)]
        b: Vector3,
        #[arg(long, value_enum)]
        axis: AxisArg,
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
    },
    /// Round every component of a position
    Round {
        #[arg(allow_hyphen_values = true)]
        position: Vector3,
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        precision: i32,
        #[arg(short, long, value_enum, default_value = "half-up")]
        mode: RoundingModeArg,
    },
    /// Unit vector pointing the same way as a position
    Normalize {
        #[arg(allow_hyphen_values = true)]
        position: Vector3,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum SideArg {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl From<SideArg> for Side {
    fn from(value: SideArg) -> Self {
        match value {
            SideArg::Down => Side::Down,
            SideArg::Up => Side::Up,
            SideArg::North => Side::North,
            SideArg::South => Side::South,
            SideArg::West => Side::West,
            SideArg::East => Side::East,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum RoundingModeArg {
    HalfUp,
    HalfDown,
    HalfEven,
    HalfOdd,
}

impl From<RoundingModeArg> for RoundingMode {
    fn from(value: RoundingModeArg) -> Self {
        match value {
            RoundingModeArg::HalfUp => RoundingMode::HalfUp,
            RoundingModeArg::HalfDown => RoundingMode::HalfDown,
            RoundingModeArg::HalfEven => RoundingMode::HalfEven,
            RoundingModeArg::HalfOdd => RoundingMode::HalfOdd,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context(anyhow!("Invalid log level {:?}", args.log_level))?;

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(command = ?args.command, "Running command");

    match args.command {
        Command::Distance { a, b } => {
            println!("distance: {}", a.distance(&b));
            println!("distance squared: {}", a.distance_squared(&b));
            println!("plain distance: {}", a.max_plain_distance(b));
        }
        Command::Side {
            position,
            side,
            step,
        } => {
            println!("{}", position.get_side(side.into(), step));
        }
        Command::Opposite { code } => {
            let opposite = Side::opposite_code(code)
                .context(anyhow!("Failed to find the side opposite {code}"))?;

            println!("{opposite}");
        }
        Command::Intersect { a, b, axis, value } => {
            match a.intermediate_with_value(&b, axis.into(), value) {
                Some(point) => println!("{point}"),
                None => println!("none"),
            }
        }
        Command::Round {
            position,
            precision,
            mode,
        } => {
            println!("{}", position.round(precision, mode.into()));
        }
        Command::Normalize { position } => {
            println!("{}", position.normalize());
        }
    }

    Ok(())
}
