use std::path::PathBuf;

use clap::Parser;
use jvl_aircraft::airframe::load_or_default;
use jvl_aircraft::config::{WriterOptions, load_writer_options, writer_options_to_yaml};
use jvl_aircraft::export::JvlWriter;
use jvl_aircraft::logging::setup_logging;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Write a JVL input file plus its airfoil and body companions"
)]
struct Cli {
    /// Main input file; companions are written alongside as <output>.afN / <output>.fuseN
    #[arg(long, default_value = "821p1")]
    output: PathBuf,

    /// Main wing airfoil: NACA 4-digit designation or path to a .dat file
    #[arg(long, default_value = "jw01.dat")]
    airfoil: String,

    /// Airframe file (YAML or TOML) replacing the built-in demonstrator
    #[arg(long)]
    config: Option<PathBuf>,

    /// Writer options file (YAML or TOML); defaults to the blown-wing preset
    #[arg(long)]
    options: Option<PathBuf>,

    /// Add the pod fuselage to the built-in demonstrator
    #[arg(long, default_value_t = false)]
    fuselage: bool,

    /// Suppress CLAF blocks
    #[arg(long, default_value_t = false)]
    no_claf: bool,

    /// Suppress JETPARAM and JETCONTROL blocks
    #[arg(long, default_value_t = false)]
    no_jet: bool,

    /// Print the effective writer options as YAML and exit
    #[arg(long, default_value_t = false)]
    dump_options: bool,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let mut options = match &cli.options {
        Some(path) => load_writer_options(path)?,
        None => WriterOptions::blown_wing(),
    };
    if cli.no_claf {
        options.claf = false;
    }
    if cli.no_jet {
        options.jet = false;
    }

    if cli.dump_options {
        print!("{}", writer_options_to_yaml(&options)?);
        return Ok(());
    }

    let airplane = load_or_default(cli.config.as_deref(), &cli.airfoil, cli.fuselage)?;
    log::info!(
        "{}: Sref {:.4} m^2, Cref {:.4} m, Bref {:.4} m",
        airplane.name,
        airplane.s_ref,
        airplane.c_ref,
        airplane.b_ref
    );

    let document = JvlWriter::new(&airplane, &options).write(&cli.output)?;

    println!("Input file: {}", document.path.display());
    for companion in &document.companions {
        println!("  {}", companion.path.display());
    }
    Ok(())
}
