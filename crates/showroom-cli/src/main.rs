//! Showroom CLI — Browse a dealership inventory from the terminal.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use log::debug;

use showroom_core::config::{CatalogConfig, Vehicle, VehicleId};
use showroom_core::filter::FilterSpec;
use showroom_core::intake::VehicleSubmission;
use showroom_core::output::{write_output, CatalogView, FlaggedSummary, VehicleDetail};
use showroom_core::{CatalogError, Session};

#[derive(Parser)]
#[command(
    name = "showroom",
    about = "Showroom - Browse, filter and shortlist a dealership inventory"
)]
struct Cli {
    /// JSON config file (placeholder image, wildcard label, year range)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available vehicles matching the given filters
    Catalog {
        /// Inventory JSON file
        inventory: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Mark these ids as possible purchases before listing
        #[arg(long = "flag")]
        flags: Vec<u64>,

        /// Write a JSON snapshot of the session
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show one vehicle in detail
    Show {
        inventory: PathBuf,
        id: u64,
    },
    /// Open an interactive session on an inventory
    Browse { inventory: PathBuf },
}

#[derive(Args, Default)]
struct FilterArgs {
    /// Case-insensitive text matched against make or model
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact make, or the wildcard label
    #[arg(short, long, default_value = "")]
    make: String,

    /// Exact body type, or the wildcard label
    #[arg(short = 't', long, default_value = "")]
    body_type: String,

    /// Maximum price (inclusive); blank means no bound
    #[arg(long, default_value = "")]
    max_price: String,

    /// Minimum year (inclusive); blank means no bound
    #[arg(long, default_value = "")]
    min_year: String,
}

impl FilterArgs {
    fn to_spec(&self, config: &CatalogConfig) -> FilterSpec {
        FilterSpec::from_inputs(
            &self.search,
            &self.make,
            &self.body_type,
            &self.max_price,
            &self.min_year,
            &config.wildcard_label,
        )
    }
}

#[derive(Args, Default)]
struct AddArgs {
    #[arg(long, default_value = "")]
    make: String,
    #[arg(long, default_value = "")]
    model: String,
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, default_value = "")]
    price: String,
    #[arg(long, default_value = "")]
    odometer: String,
    #[arg(long, default_value = "")]
    body_type: String,
    #[arg(long, default_value = "")]
    color: String,
    #[arg(long, default_value = "")]
    transmission: String,
    #[arg(long, default_value = "")]
    fuel_type: String,
    #[arg(long, default_value = "")]
    image: String,
    #[arg(long, default_value = "")]
    description: String,
}

impl From<AddArgs> for VehicleSubmission {
    fn from(a: AddArgs) -> Self {
        VehicleSubmission {
            make: a.make,
            model: a.model,
            year: a.year,
            price: a.price,
            odometer: a.odometer,
            body_type: a.body_type,
            color: a.color,
            transmission: a.transmission,
            fuel_type: a.fuel_type,
            image: a.image,
            description: a.description,
        }
    }
}

/// Commands accepted inside `browse`.
#[derive(Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
enum BrowseCommand {
    /// List available vehicles
    List(FilterArgs),
    /// Show one vehicle
    Show { id: u64 },
    /// Mark or unmark a vehicle as a possible purchase
    Flag { id: u64 },
    /// Show the possible-purchase list
    Flagged,
    /// Add a new listing
    Add(AddArgs),
    /// Write a JSON snapshot of the session
    Save { path: String },
    /// Leave the session
    Quit,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.config {
        Some(ref path) => match CatalogConfig::from_path(path) {
            Ok(c) => c,
            Err(e) => fail(&format!("Error reading config: {e}")),
        },
        None => CatalogConfig::default(),
    };

    match cli.command {
        Commands::Catalog {
            inventory,
            filters,
            flags,
            output,
        } => {
            let mut session = open_session(&inventory, config);
            for id in flags {
                if let Err(e) = session.toggle(VehicleId(id)) {
                    fail(&e.to_string());
                }
            }
            let spec = filters.to_spec(session.config());
            print_catalog(&session.catalog(&spec));
            if session.flagged_count() > 0 {
                print_flagged(&session.flagged());
            }
            if let Some(path) = output {
                save(&session, &path);
            }
        }
        Commands::Show { inventory, id } => {
            let session = open_session(&inventory, config);
            match session.detail(VehicleId(id)) {
                Ok(detail) => print_detail(&detail),
                Err(e) => fail(&e.to_string()),
            }
        }
        Commands::Browse { inventory } => {
            let mut session = open_session(&inventory, config);
            if let Err(e) = browse(&mut session) {
                fail(&format!("Session ended: {e}"));
            }
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(message: &str) -> ! {
    eprintln!("{} {message}", style("error:").red().bold());
    std::process::exit(1);
}

fn open_session(inventory: &Path, config: CatalogConfig) -> Session {
    match Session::load(inventory, config) {
        Ok(s) => s,
        Err(e) => fail(&format!("Could not load inventory: {e}")),
    }
}

fn save(session: &Session, path: &str) {
    if let Err(e) = write_output(&session.snapshot(), path) {
        fail(&format!("Error writing output: {e}"));
    }
    println!("\n  {} {}", style("Output written to:").green(), path);
}

fn browse(session: &mut Session) -> io::Result<()> {
    println!(
        "{}  Showroom: {} vehicles loaded. Commands: list, show, flag, flagged, add, save, quit",
        style("✓").green().bold(),
        session.store().len()
    );
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(
            "{} ",
            style(format!("showroom[{}]>", session.flagged_count())).cyan()
        );
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let Some(words) = shlex::split(&line) else {
            eprintln!("  {} unbalanced quotes", style("rejected:").red());
            continue;
        };
        if words.is_empty() {
            continue;
        }
        let command = match BrowseCommand::try_parse_from(&words) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        debug!("browse command: {:?}", words);
        match command {
            BrowseCommand::List(filters) => {
                print_catalog(&session.catalog(&filters.to_spec(session.config())))
            }
            BrowseCommand::Show { id } => match session.detail(VehicleId(id)) {
                Ok(detail) => print_detail(&detail),
                Err(e) => report(&e),
            },
            BrowseCommand::Flag { id } => match session.toggle(VehicleId(id)) {
                Ok(outcome) => println!("  {}", style(outcome.notice()).green()),
                Err(e) => report(&e),
            },
            BrowseCommand::Flagged => print_flagged(&session.flagged()),
            BrowseCommand::Add(args) => match session.submit(&args.into()) {
                Ok(v) => println!(
                    "  {} {} (id {})",
                    style("Vehicle added successfully:").green(),
                    v.title(),
                    v.id
                ),
                Err(e) => report(&e),
            },
            BrowseCommand::Save { path } => {
                if let Err(e) = write_output(&session.snapshot(), &path) {
                    eprintln!("  Error writing output: {e}");
                } else {
                    println!("  {} {}", style("Output written to:").green(), path);
                }
            }
            BrowseCommand::Quit => return Ok(()),
        }
    }
}

fn report(e: &CatalogError) {
    let label = if e.is_not_found() {
        style("not found:").yellow()
    } else {
        style("rejected:").red()
    };
    eprintln!("  {label} {e}");
}

fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if whole < 0 {
        out.insert(0, '-');
    }
    format!("${out}")
}

fn print_row(v: &Vehicle, flagged: bool) {
    println!(
        "  {:>14}  {:<28} {:>6}  {:<11} {:>16}{}",
        v.id.get(),
        v.title(),
        v.year,
        v.body_type.as_str(),
        format_price(v.price),
        if flagged { "  ★" } else { "" }
    );
}

fn print_catalog(view: &CatalogView) {
    println!(
        "\n{}  Showing {} of {} vehicles",
        style("✓").green().bold(),
        style(view.showing).bold(),
        view.available
    );
    if view.vehicles.is_empty() {
        println!("  No vehicles found. Try adjusting the filters.");
        return;
    }
    for v in &view.vehicles {
        print_row(v, false);
    }
    println!("  {:<14} {}", "Makes:", view.make_options.join(", "));
    println!("  {:<14} {}", "Body types:", view.body_type_options.join(", "));
}

fn print_flagged(summary: &FlaggedSummary) {
    println!("\n{}  Possible purchases", style("★").yellow().bold());
    if summary.count == 0 {
        println!("  No vehicles marked yet.");
        return;
    }
    for v in &summary.vehicles {
        print_row(v, true);
    }
    println!("  {:<14} {}", "Selected:", summary.count);
    println!("  {:<14} {}", "Total value:", format_price(summary.total_price));
}

fn print_detail(detail: &VehicleDetail) {
    let v = &detail.vehicle;
    println!(
        "\n{}  {}{}",
        style("✓").green().bold(),
        style(v.title()).bold(),
        if detail.flagged {
            style("  (possible purchase)").yellow().to_string()
        } else {
            String::new()
        }
    );
    println!("  {:<14} {}", "Price:", format_price(v.price));
    println!("  {:<14} {}", "Year:", v.year);
    println!("  {:<14} {} km", "Odometer:", v.odometer);
    println!("  {:<14} {}", "Body type:", v.body_type);
    println!("  {:<14} {}", "Color:", v.color);
    println!("  {:<14} {}", "Transmission:", v.transmission);
    println!("  {:<14} {}", "Fuel:", v.fuel_type);
    println!("  {:<14} {}", "Image:", v.image);
    println!("\n  {}", v.description);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        shlex::split(line).unwrap()
    }

    #[test]
    fn browse_lines_tokenize_like_a_shell() {
        assert_eq!(
            words(r#"add --make Ford --description "Low mileage, one owner""#),
            vec!["add", "--make", "Ford", "--description", "Low mileage, one owner"]
        );
        assert_eq!(words(r#"add --description "16\" wheels""#)[2], "16\" wheels");
        assert_eq!(words("add --color 'Deep Blue'")[2], "Deep Blue");
        assert_eq!(words("  list  "), vec!["list"]);
        assert!(words("   ").is_empty());
        assert!(shlex::split(r#"add --make "Ford"#).is_none());
    }

    #[test]
    fn quoted_description_reaches_the_submission() {
        let cmd = BrowseCommand::try_parse_from(words(
            r#"add --make Ford --description "16\" wheels, one owner""#,
        ))
        .unwrap();
        match cmd {
            BrowseCommand::Add(args) => {
                let sub = VehicleSubmission::from(args);
                assert_eq!(sub.description, "16\" wheels, one owner");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(9_000_000.0), "$9,000,000");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn browse_commands_parse() {
        let cmd = BrowseCommand::try_parse_from(["list", "--make", "Toyota", "--min-year", "2020"])
            .unwrap();
        match cmd {
            BrowseCommand::List(f) => {
                let spec = f.to_spec(&CatalogConfig::default());
                assert_eq!(spec.min_year, Some(2020));
            }
            _ => panic!("expected list"),
        }
        assert!(matches!(
            BrowseCommand::try_parse_from(["flag", "2"]).unwrap(),
            BrowseCommand::Flag { id: 2 }
        ));
        assert!(BrowseCommand::try_parse_from(["fly"]).is_err());
    }
}
