use clap::Parser;
use color_print::cprintln;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input map file
    #[clap(default_value = "GZLE01.map")]
    input: PathBuf,

    /// Output IDC script [default: input with `.idc` extension]
    output: Option<PathBuf>,

    /// Dump renamed segments and named symbols
    #[clap(short, long)]
    dump: bool,

    /// Only print errors
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        err.print_diag();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> map2idc::Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| map2idc::default_output(&args.input));

    macro_rules! say {
        ($($arg:tt)*) => {
            if !args.quiet {
                cprintln!($($arg)*);
            }
        };
    }

    say!("map2idc {}", env!("CARGO_PKG_VERSION"));

    say!("1. Read Map File and Split Sections");
    say!("  << {}", args.input.display());
    let sections = map2idc::read_map(&args.input)?;
    say!("  - found #{} sections", sections.len());

    say!("2. Generate Script");
    say!("  > {}", output.display());
    let (segments, symbols) = map2idc::write_script(&output, &sections)?;
    say!(
        "  - renamed #{} segments <s>(skipped {} rows)</>",
        segments.segments.len(),
        segments.skipped
    );
    say!(
        "  - named #{} symbols, #{} comments <s>(skipped {} rows, ignored {})</>",
        symbols.symbols.len(),
        symbols.comments(),
        symbols.skipped,
        symbols.ignored
    );
    if !symbols.missing.is_empty() {
        say!(
            "  - <yellow>no layout</> for: {}",
            symbols.missing.join(", ")
        );
    }

    if args.dump {
        map2idc::dump::print_dump(&segments, &symbols);
    }

    Ok(())
}
