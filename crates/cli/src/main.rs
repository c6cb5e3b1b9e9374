use anyhow::Result;
use clap::{Parser, Subcommand};
use outreach_core::import;
use outreach_core::pricing::{PAIN_POINT_OPTIONS, PricingBook, compute_quote};
use outreach_core::schedule::{CAMPAIGN_DAYS, SchedulePlan};
use outreach_core::schema::{
    FilterCriteria, FocusArea, Lead, ProposalDraft, StatusFilter,
};
use outreach_core::session::OutreachSession;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Active AI outreach operations CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export canonical JSON Schemas to the ./schemas directory
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
    /// Validate a lead spreadsheet and report what would load
    Import {
        /// Lead workbook (.xlsx/.xls), or a JSON row array with --json
        #[arg(long)]
        file: PathBuf,
        /// Treat the file as a JSON array of row objects
        #[arg(long)]
        json: bool,
    },
    /// List leads passing the filter criteria
    Leads {
        /// Lead file to load (defaults to the built-in sample set)
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Free-text search across name, company, and title
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        min_employees: Option<u32>,
        #[arg(long)]
        max_employees: Option<u32>,
        /// Exact country match (omit for all countries)
        #[arg(long)]
        country: Option<String>,
        /// all, messaged, not-messaged, or responded
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Directory statistics for a lead file
    Stats {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Render the personalized outreach message for one lead
    Message {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Lead identifier
        #[arg(long)]
        id: u32,
        /// Template file overriding the built-in template
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Campaign projection for a daily message target
    Schedule {
        /// Messages per day (clamped to 5..=50)
        #[arg(long, default_value_t = 20)]
        daily_target: u32,
    },
    /// Proposal tools
    Proposal {
        #[command(subcommand)]
        command: ProposalCommands,
    },
    /// Print the discovery-call script
    Discovery,
    /// Print the pricing framework
    Pricing {
        /// Price book TOML overriding the built-in table
        #[arg(long)]
        book: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Export JSON Schema files for canonical types
    Export {
        /// Output directory (default: ./schemas)
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum ProposalCommands {
    /// Price a proposal and render the document
    Generate {
        #[arg(long)]
        company: String,
        #[arg(long)]
        contact: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        email: String,
        /// One of the four automation areas
        #[arg(long, default_value = "Customer Service Automation")]
        area: FocusArea,
        /// Affected team size; omit to assume 50 implementation hours
        #[arg(long, default_value = "")]
        team_size: String,
        /// Repeatable; duplicates are ignored
        #[arg(long = "pain-point")]
        pain_points: Vec<String>,
        #[arg(long)]
        book: Option<PathBuf>,
        /// Also write ${company}_Proposal.txt into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// List the canned pain-point options
    PainPoints,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema { command } => match command {
            SchemaCommands::Export { out_dir } => schema_export(out_dir),
        },
        Commands::Import { file, json } => import_leads(&file, json),
        Commands::Leads {
            file,
            json,
            search,
            min_employees,
            max_employees,
            country,
            status,
        } => {
            let mut session = load_session(file.as_deref(), json)?;
            session.set_criteria(FilterCriteria {
                search,
                min_employees,
                max_employees,
                country,
                status,
            });
            print_leads(&session);
            Ok(())
        }
        Commands::Stats { file, json } => {
            let session = load_session(file.as_deref(), json)?;
            let stats = session.stats();
            println!("Total Leads:   {}", stats.total);
            println!("Messaged:      {}", stats.messaged);
            println!("Responses:     {}", stats.responded);
            println!("Response Rate: {}%", stats.response_rate);
            Ok(())
        }
        Commands::Message {
            file,
            json,
            id,
            template,
        } => {
            let mut session = load_session(file.as_deref(), json)?;
            if let Some(path) = template {
                session.template = fs::read_to_string(&path)?;
            }
            match session.message_for(id) {
                Some(message) => println!("{message}"),
                None => println!("No lead with id {id}"),
            }
            Ok(())
        }
        Commands::Schedule { daily_target } => {
            print_schedule(daily_target);
            Ok(())
        }
        Commands::Proposal { command } => match command {
            ProposalCommands::Generate {
                company,
                contact,
                title,
                email,
                area,
                team_size,
                pain_points,
                book,
                out_dir,
            } => generate_proposal(
                company, contact, title, email, area, team_size, pain_points, book, out_dir,
            ),
            ProposalCommands::PainPoints => {
                for point in PAIN_POINT_OPTIONS {
                    println!("- {point}");
                }
                Ok(())
            }
        },
        Commands::Discovery => {
            print!("{}", docgen::discovery::render());
            Ok(())
        }
        Commands::Pricing { book } => {
            let book = load_book(book.as_deref())?;
            print_pricing(&book);
            Ok(())
        }
    }
}

fn schema_export(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)?;

    let lead_schema = schema_for!(Lead);
    let lead_json = serde_json::to_string_pretty(&lead_schema)?;
    fs::write(out_dir.join("Lead.schema.json"), lead_json)?;

    let criteria_schema = schema_for!(FilterCriteria);
    let criteria_json = serde_json::to_string_pretty(&criteria_schema)?;
    fs::write(out_dir.join("FilterCriteria.schema.json"), criteria_json)?;

    let proposal_schema = schema_for!(ProposalDraft);
    let proposal_json = serde_json::to_string_pretty(&proposal_schema)?;
    fs::write(out_dir.join("ProposalDraft.schema.json"), proposal_json)?;

    println!("Exported schemas to {}", out_dir.display());
    Ok(())
}

fn read_rows(path: &Path, json: bool) -> Result<Vec<outreach_core::normalize::RowMap>> {
    if json {
        import::rows_from_json(&fs::read_to_string(path)?)
    } else {
        import::read_workbook(path)
    }
}

/// Build a session for this invocation: a fresh in-memory view seeded
/// either from the given file or from the built-in sample set.
fn load_session(file: Option<&Path>, json: bool) -> Result<OutreachSession> {
    match file {
        None => Ok(OutreachSession::seeded()),
        Some(path) => {
            let rows = read_rows(path, json)?;
            let mut session = OutreachSession::new();
            session.load_rows(&rows);
            Ok(session)
        }
    }
}

fn import_leads(file: &Path, json: bool) -> Result<()> {
    match read_rows(file, json) {
        Ok(rows) => {
            let mut session = OutreachSession::new();
            let count = session.load_rows(&rows);
            println!("\u{2713} Loaded {count} leads successfully!");
            Ok(())
        }
        Err(error) => {
            // Non-fatal in the source UI: the note is shown and the prior
            // directory stays. Here the note goes to stdout and the exit
            // code marks the failure.
            println!("\u{2717} Error loading file. Please check the format.");
            log::debug!("Import failed: {error:#}");
            std::process::exit(1);
        }
    }
}

fn print_leads(session: &OutreachSession) {
    let leads = session.filtered_leads();
    println!("Prospects ({})", leads.len());
    for lead in leads {
        println!(
            "{:>4}  {} {} - {}, {} ({} employees, {}) [{}]",
            lead.id,
            lead.first_name,
            lead.last_name,
            lead.title,
            lead.company,
            lead.employees,
            lead.country,
            lead.focus
        );
    }
}

fn print_schedule(daily_target: u32) {
    let mut plan = SchedulePlan::default();
    plan.set_daily_target(daily_target);

    println!("Message Schedule");
    for slot in &plan.slots {
        println!(
            "  {}  {} messages  ({})",
            slot.time, slot.messages_per_slot, slot.days
        );
    }
    println!(
        "Current schedule: {} messages per day across {} time slots",
        plan.daily_volume(),
        plan.slots.len()
    );
    println!();
    println!(
        "At {} messages per day, you'll reach {} prospects in {} days with an estimated {} responses and {} deals.",
        plan.daily_target(),
        plan.messages_scheduled(),
        CAMPAIGN_DAYS,
        plan.expected_responses(),
        plan.estimated_conversions()
    );
}

fn load_book(path: Option<&Path>) -> Result<PricingBook> {
    match path {
        Some(path) => PricingBook::load_from_path(path),
        None => Ok(PricingBook::default()),
    }
}

fn print_pricing(book: &PricingBook) {
    println!("Pricing Framework");
    for (area, pricing) in book.iter() {
        println!();
        println!("{area}");
        println!("  Base Service Fee:          \u{a3}{}", pricing.base);
        println!("  Implementation (per hour): \u{a3}{}", pricing.per_hour);
        println!("  Typical Delivery:          {} weeks", pricing.delivery_weeks);
        println!(
            "  Typical Project:           \u{a3}{} (base + ~50 hours implementation)",
            pricing.typical_project()
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn generate_proposal(
    company: String,
    contact: String,
    title: String,
    email: String,
    area: FocusArea,
    team_size: String,
    pain_points: Vec<String>,
    book: Option<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let mut draft = ProposalDraft {
        company_name: company,
        contact_name: contact,
        contact_title: title,
        email,
        automation_area: area,
        team_size,
        ..Default::default()
    };
    for point in &pain_points {
        draft.add_pain_point(point);
    }

    let book = load_book(book.as_deref())?;
    let quote = compute_quote(&draft, &book);
    let today = OffsetDateTime::now_utc().date();
    let document = docgen::proposal::render(&draft, &quote, today);

    print!("{document}");
    if let Some(out_dir) = out_dir {
        let path = docgen::export::write_proposal(&out_dir, &draft.company_name, &document)?;
        println!();
        println!("Wrote {}", path.display());
    }
    Ok(())
}
