use std::fmt::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use itinerai::{
    GeminiClient, ItinerAiConfig, ParsedItinerary, TripPlanner, TripRequest, classify_activity,
    format_label, logging, parse_itinerary_document, web,
};

/// AI-assisted travel itinerary planning
#[derive(Parser)]
#[command(name = "itinerai", version, about)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "ITINERAI_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse itinerary text into day records
    Parse {
        /// Input file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Generate an itinerary with Gemini and parse it
    Plan {
        #[arg(short, long)]
        destination: String,
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        people: Option<u32>,
        /// Total budget in INR
        #[arg(long)]
        budget: Option<u64>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ItinerAiConfig::load_from_path(cli.config)?;
    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Command::Parse { input, format } => {
            let text = match input {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())
                    .context("Failed to read itinerary from stdin")?,
            };
            let parsed = parse_itinerary_document(Some(&text));
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
                OutputFormat::Text => print!("{}", render_text(&parsed)?),
            }
        }
        Command::Plan {
            destination,
            days,
            people,
            budget,
            format,
        } => {
            let request = TripRequest::new(
                destination,
                days.unwrap_or(config.defaults.days),
                people.unwrap_or(config.defaults.people),
                budget.unwrap_or(config.defaults.budget),
            );
            let client = GeminiClient::new(config.gemini.clone())?;
            let planner = TripPlanner::new(Arc::new(client));
            let trip = planner.plan(&request).await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trip)?),
                OutputFormat::Text => {
                    println!(
                        "Your {}-day journey to {} ({} people, {})\n",
                        trip.days, trip.destination, trip.people, trip.accommodation_tier
                    );
                    print!(
                        "{}",
                        render_text(&ParsedItinerary {
                            days: trip.itinerary,
                            general_notes: trip.general_notes,
                        })?
                    );
                }
            }
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config).await?;
        }
    }

    Ok(())
}

fn render_text(parsed: &ParsedItinerary) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for day in &parsed.days {
        match &day.overview {
            Some(overview) => writeln!(out, "Day {}: {}", day.day_number, overview)?,
            None => writeln!(out, "Day {}", day.day_number)?,
        }
        for activity in &day.activities {
            let kind = classify_activity(activity);
            let line = format_label(activity);
            match line.label {
                Some(label) => writeln!(out, "  [{}] {}: {}", kind.icon(), label, line.content)?,
                None => writeln!(out, "  [{}] {}", kind.icon(), line.content)?,
            }
        }
        for (title, entries) in [
            ("Accommodation", &day.accommodation),
            ("Dining", &day.dining),
            ("Travel Tip", &day.travel_tips),
        ] {
            for entry in entries {
                writeln!(out, "  {title}: {}", format_label(entry).content)?;
            }
        }
        out.push('\n');
    }

    if !parsed.general_notes.is_empty() {
        out.push_str("General information\n");
        for note in &parsed.general_notes {
            writeln!(out, "  {}", note.replace("**", ""))?;
        }
    }

    Ok(out)
}
